//! Single-page portfolio: hero, skills, experience, education, contact.

use folio_core::{
    Icon, PortfolioView, Section,
    content::portfolio::{EDUCATION, EXPERIENCES, NAV, PROFILE, SKILLS},
    portfolio::{ContactCard, Experience, SkillCategory},
};
use folio_ui::{
    ChipList, FallibleImage, FloatingOrbs, GlassCard, GradientText, IconBadge, IconGlyph,
    MouseTracker, SectionNav, dom,
};
use leptos::{ev, prelude::*};
use leptos_meta::Title;

use super::{OUTBOUND_REL, OUTBOUND_TARGET};

fn is_mailto(href: &str) -> bool {
    href.starts_with("mailto:")
}

/// `target`/`rel` for a link; mail links open in place.
fn link_target(href: &str) -> (Option<&'static str>, Option<&'static str>) {
    if is_mailto(href) {
        (None, None)
    } else {
        (Some(OUTBOUND_TARGET), Some(OUTBOUND_REL))
    }
}

fn scroll_to(section: Section) {
    if let Err(err) = dom::scroll_to_section(section.id()) {
        log::debug!("skipping scroll: {err}");
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let view_state = RwSignal::new(PortfolioView::new());

    let handle = window_event_listener(ev::scroll, move |_| {
        let bounds = dom::measure_sections(&Section::ALL);
        let scroll_y = dom::scroll_y();
        view_state.update(|view| view.on_scroll(scroll_y, &bounds));
    });
    on_cleanup(move || handle.remove());

    // Deep links such as `/#experience` land on their section once mounted.
    Effect::new(move |_| {
        if let Some(section) = dom::location_hash().as_deref().and_then(Section::from_hash) {
            scroll_to(section);
        }
    });

    let active = Signal::derive(move || view_state.with(|view| view.active()));
    let scrolled = Signal::derive(move || view_state.with(|view| view.scrolled()));

    view! {
      <Title text=PROFILE.full_name() />
      <div class="portfolio">
        <MouseTracker />
        <FloatingOrbs />
        <SectionNav
          entries=NAV
          active=active
          scrolled=scrolled
          on_select=Callback::new(scroll_to)
        />
        <Hero />
        <Skills />
        <ExperienceTimeline />
        <EducationBlock />
        <Contact />
      </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
      <section id=Section::Hero.id() class="hero">
        <div class="hero-inner">
          {PROFILE
            .portrait
            .map(|src| {
              view! {
                <div class="portrait-frame">
                  <FallibleImage src=src alt=PROFILE.full_name() class="portrait" />
                </div>
              }
            })}
          <h1 class="hero-name">
            <GradientText>{PROFILE.first_name}</GradientText>
            " "
            <span class="hero-surname">{PROFILE.last_name}</span>
          </h1>
          <p class="hero-headline">{PROFILE.headline}</p>
          <GlassCard class="hero-summary" hover=false>
            <p>
              <span class="highlight">{PROFILE.experience_years}</span>
              " "
              {PROFILE.summary}
            </p>
            <p class="hero-focus">{PROFILE.current_focus}</p>
          </GlassCard>
          <div class="hero-links">
            {PROFILE
              .links
              .iter()
              .map(|link| {
                let (target, rel) = link_target(link.href);
                view! {
                  <a class="hero-link" href=link.href target=target rel=rel>
                    <IconGlyph icon=link.icon />
                    <span>{link.label}</span>
                  </a>
                }
              })
              .collect_view()}
          </div>
          <button
            class="scroll-hint"
            aria-label="Scroll to skills"
            on:click=move |_| scroll_to(Section::Skills)
          >
            <IconGlyph icon=Icon::ChevronDown />
          </button>
        </div>
      </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
      <section id=Section::Skills.id() class="page-section">
        <h2 class="section-title">
          <GradientText>"Technical Expertise"</GradientText>
        </h2>
        <div class="skills-grid">
          {SKILLS.iter().map(|category| view! { <SkillCard category=*category /> }).collect_view()}
        </div>
      </section>
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> impl IntoView {
    view! {
      <GlassCard class="skill-card">
        <div class="skill-card-header">
          <IconBadge icon=category.icon color=category.color />
          <h3>{category.title}</h3>
        </div>
        <ChipList items=category.skills />
      </GlassCard>
    }
}

#[component]
fn ExperienceTimeline() -> impl IntoView {
    view! {
      <section id=Section::Experience.id() class="page-section">
        <h2 class="section-title">
          <GradientText>"Professional Journey"</GradientText>
        </h2>
        <div class="timeline">
          {EXPERIENCES
            .iter()
            .map(|experience| view! { <ExperienceEntry experience=*experience /> })
            .collect_view()}
        </div>
      </section>
    }
}

#[component]
fn ExperienceEntry(experience: Experience) -> impl IntoView {
    view! {
      <div class="timeline-entry">
        <div class="timeline-marker">
          <IconBadge icon=experience.icon color=experience.color />
        </div>
        <GlassCard class="experience-card">
          <div class="experience-header">
            <div>
              <h3 class="experience-title">{experience.title}</h3>
              <div class="experience-company">
                {experience
                  .logo
                  .map(|src| {
                    view! {
                      <FallibleImage
                        src=src
                        alt=format!("{} logo", experience.company)
                        class="company-logo"
                      />
                    }
                  })}
                <span>{experience.company}</span>
              </div>
              <p class="experience-meta">{experience.location_line()}</p>
            </div>
            <span class="experience-period">
              <IconGlyph icon=Icon::Calendar />
              {experience.period}
            </span>
          </div>
          <p class="experience-description">{experience.description}</p>
          <h4 class="experience-subheading">"Key Achievements"</h4>
          <ul class="achievements">
            {experience
              .achievements
              .iter()
              .map(|achievement| {
                view! {
                  <li>
                    <IconGlyph icon=Icon::ChevronRight />
                    {*achievement}
                  </li>
                }
              })
              .collect_view()}
          </ul>
          <ChipList items=experience.technologies class="technologies" />
          {experience
            .website
            .map(|href| {
              view! {
                <a class="visit-website" href=href target=OUTBOUND_TARGET rel=OUTBOUND_REL>
                  <IconGlyph icon=Icon::ExternalLink />
                  "Visit Website"
                </a>
              }
            })}
        </GlassCard>
      </div>
    }
}

#[component]
fn EducationBlock() -> impl IntoView {
    view! {
      <section id=Section::Education.id() class="page-section">
        <h2 class="section-title">
          <GradientText>"Education & Research"</GradientText>
        </h2>
        <GlassCard class="education-card">
          <div class="education-header">
            <IconBadge icon=Icon::BookOpen color="from-indigo-500 to-purple-500" />
            <div>
              <h3>{EDUCATION.role}</h3>
              <p class="education-institution">{EDUCATION.institution}</p>
              <p class="education-period">{EDUCATION.period}</p>
            </div>
          </div>
          <p>{EDUCATION.description}</p>
          <p class="publication">{EDUCATION.publication}</p>
          <ChipList items=EDUCATION.topics />
        </GlassCard>
      </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
      <section id=Section::Contact.id() class="page-section contact">
        <h2 class="section-title">
          <GradientText>"Let's Connect"</GradientText>
        </h2>
        <p class="contact-blurb">{PROFILE.contact_blurb}</p>
        <div class="contact-grid">
          {PROFILE
            .contact_cards
            .iter()
            .map(|card| view! { <ContactTile card=*card /> })
            .collect_view()}
        </div>
      </section>
    }
}

#[component]
fn ContactTile(card: ContactCard) -> impl IntoView {
    let (target, rel) = link_target(card.href);
    view! {
      <a class="contact-tile" href=card.href target=target rel=rel>
        <GlassCard class="contact-card">
          <IconGlyph icon=card.icon class="contact-icon" />
          <h3>{card.heading}</h3>
          <p>{card.detail}</p>
        </GlassCard>
      </a>
    }
}
