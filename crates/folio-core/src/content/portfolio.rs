//! Portfolio content.

use crate::{
    icon::Icon,
    portfolio::{ContactCard, ContactLink, Education, Experience, NavEntry, Profile, SkillCategory},
    state::Section,
};

pub const EMAIL: &str = "mailto:met600@gmail.com";
pub const GITHUB: &str = "https://github.com/thethomp/";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/michael-thompson-6a42532b/";
pub const CONSULTING: &str = "https://www.sudosquad.com/";

pub const PROFILE: Profile = Profile {
    first_name: "Mike",
    last_name: "Thompson",
    headline: "Senior Staff Machine Learning Software Engineer",
    experience_years: "13+ years",
    summary: "of experience designing, building, and operating production data systems and AI/ML solutions.",
    current_focus: "Currently leading AI transformation at PlayStation, developing enterprise-scale AI infrastructure, and empowering 1500+ users across all studios with cutting-edge AI tooling and workflows.",
    portrait: Some("/portrait.jpg"),
    links: &[
        ContactLink {
            label: "Contact",
            href: EMAIL,
            icon: Icon::Mail,
        },
        ContactLink {
            label: "GitHub",
            href: GITHUB,
            icon: Icon::Github,
        },
        ContactLink {
            label: "LinkedIn",
            href: LINKEDIN,
            icon: Icon::Linkedin,
        },
        ContactLink {
            label: "Sudo Squad",
            href: CONSULTING,
            icon: Icon::ExternalLink,
        },
    ],
    contact_cards: &[
        ContactCard {
            heading: "Email",
            detail: "met600@gmail.com",
            href: EMAIL,
            icon: Icon::Mail,
        },
        ContactCard {
            heading: "Consulting",
            detail: "Sudo Squad LLC",
            href: CONSULTING,
            icon: Icon::ExternalLink,
        },
    ],
    contact_blurb: "Ready to discuss AI innovation, enterprise architecture, or cutting-edge ML solutions?",
};

pub const NAV: &[NavEntry] = &[
    NavEntry {
        section: Section::Hero,
        label: "Home",
        icon: Icon::Users,
    },
    NavEntry {
        section: Section::Skills,
        label: "Skills",
        icon: Icon::Code,
    },
    NavEntry {
        section: Section::Experience,
        label: "Experience",
        icon: Icon::Building,
    },
    NavEntry {
        section: Section::Education,
        label: "Education",
        icon: Icon::BookOpen,
    },
    NavEntry {
        section: Section::Contact,
        label: "Contact",
        icon: Icon::Mail,
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "AI/ML & LLM Engineering",
        icon: Icon::Brain,
        color: "from-purple-500 to-pink-500",
        skills: &[
            "OpenAI GPT Models",
            "Anthropic Claude",
            "Google Gemini",
            "LLM Applications",
            "MCP Servers",
            "AI Code Editors (Cursor, Windsurf)",
            "Extensions (Cline, Roo)",
            "Prompt Engineering",
            "AI Workflow Automation",
            "Enterprise AI Infrastructure",
        ],
    },
    SkillCategory {
        title: "Programming & Development",
        icon: Icon::Code,
        color: "from-blue-500 to-cyan-500",
        skills: &[
            "Python",
            "Java",
            "SQL",
            "JavaScript",
            "Bash",
            "4D",
            "Django",
            "REST APIs",
            "SOAP Web Services",
            "ETL Pipelines",
        ],
    },
    SkillCategory {
        title: "Cloud & Infrastructure",
        icon: Icon::Cloud,
        color: "from-green-500 to-emerald-500",
        skills: &[
            "AWS (S3, Glue, Lambda, Kinesis)",
            "Google Cloud (GCS, PubSub)",
            "Terraform",
            "Kubernetes",
            "Docker",
            "High Availability Systems",
            "SLA Management",
        ],
    },
    SkillCategory {
        title: "Data Technologies",
        icon: Icon::Database,
        color: "from-orange-500 to-red-500",
        skills: &[
            "Hadoop",
            "MapReduce",
            "Spark",
            "Kafka",
            "Snowflake",
            "BigQuery",
            "Elasticsearch",
            "Redis",
            "Prefect",
            "DBT",
            "Hive",
            "Pentaho",
        ],
    },
    SkillCategory {
        title: "Monitoring & Analytics",
        icon: Icon::TrendingUp,
        color: "from-indigo-500 to-purple-500",
        skills: &[
            "Datadog",
            "InfluxDB",
            "Zenoss",
            "Real-time Analytics",
            "Performance Tuning",
            "Observability Engineering",
            "Data Visualization",
        ],
    },
    SkillCategory {
        title: "Leadership & Strategy",
        icon: Icon::Users,
        color: "from-teal-500 to-blue-500",
        skills: &[
            "Team Leadership",
            "Technical Strategy",
            "Cross-functional Collaboration",
            "AI Education & Training",
            "Enterprise Architecture",
            "Product Ownership",
        ],
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Senior Staff Machine Learning Software Engineer",
        company: "PlayStation",
        period: "August 2024 - Present",
        location: "Remote",
        kind: "Full-time",
        color: "from-blue-600 to-purple-600",
        icon: Icon::MonitorSpeaker,
        description: "Leading AI transformation across all PlayStation studios, architecting enterprise-scale AI infrastructure serving 1500+ users.",
        achievements: &[
            "Lead AI enablement initiatives across all PlayStation studios as technical lead for enterprise AI infrastructure and strategy",
            "Architect and maintain internal AI API gateway providing unified access to OpenAI, Anthropic, Google Gemini, and other state-of-the-art models",
            "Develop and host LLM web chat solutions serving 1500+ users across all studios and internal teams",
            "Design and implement central MCP server hosting to connect LLM applications with external data sources and systems",
            "Conduct AI education workshops covering AI code editors (Cursor, Windsurf), extensions (Cline, Roo), and prompt engineering",
            "Build LiveOps reporting solutions and automated insight generation from player feedback data at scale",
            "Lead outreach and discovery initiatives, building relationships with studios to identify AI opportunities",
        ],
        technologies: &[
            "OpenAI",
            "Anthropic Claude",
            "Google Gemini",
            "LLM Applications",
            "MCP Servers",
            "Enterprise AI",
            "LiveOps",
            "Python",
        ],
        website: None,
        logo: Some("/logos/playstation.svg"),
    },
    Experience {
        title: "Co-Founder",
        company: "Sudo Squad LLC",
        period: "November 2024 - Present",
        location: "Remote",
        kind: "Founder",
        color: "from-purple-600 to-pink-600",
        icon: Icon::Sparkles,
        description: "AI Engineering consulting company focused on helping organizations implement cutting-edge AI solutions.",
        achievements: &[
            "Founded AI Engineering consulting company specializing in enterprise AI implementation",
            "Develop cutting-edge AI solutions for clients across various industries",
            "Provide strategic AI consulting and technical implementation services",
            "Focus on practical AI applications that deliver measurable business value",
        ],
        technologies: &[
            "AI Consulting",
            "Enterprise Solutions",
            "Technical Leadership",
            "Business Strategy",
        ],
        website: Some(CONSULTING),
        logo: Some("/logos/sudosquad.svg"),
    },
    Experience {
        title: "Data Architect",
        company: "Bungie",
        period: "August 2023 - August 2024",
        location: "Bellevue, WA",
        kind: "Full-time",
        color: "from-orange-600 to-red-600",
        icon: Icon::Shield,
        description: "Architected LLM-powered workflows and AI-driven game development tools for Destiny franchise operations.",
        achievements: &[
            "Architected and implemented LLM-powered LiveOps support workflows and ETL pipelines for analytics engineering teams",
            "Led development of AI-powered game development workflow tools including ProdSec ban appeal pipeline triaging",
            "Built automated player support ticket systems significantly improving support team efficiency",
            "Deployed company-wide LLM web chat solutions with private model endpoints",
            "Drove AI education and adoption initiatives across the studio, empowering teams with state-of-the-art models",
            "Designed machine learning applications for game operations and player support optimization",
        ],
        technologies: &[
            "LLM Workflows",
            "ETL Pipelines",
            "AI Automation",
            "Game Development Tools",
            "Player Support Systems",
            "Private Model Endpoints",
        ],
        website: None,
        logo: Some("/logos/bungie.svg"),
    },
    Experience {
        title: "Data Engineering Manager",
        company: "ProbablyMonsters",
        period: "June 2018 - August 2023",
        location: "Bellevue, WA",
        kind: "Management",
        color: "from-green-600 to-teal-600",
        icon: Icon::Building,
        description: "Established and managed Data Insights team, architecting game-agnostic cloud-based analytics systems.",
        achievements: &[
            "Established and managed the Data Insights team from inception, defining vision, goals, and engagement models",
            "Architected game-agnostic, end-to-end cloud-based data analytics system including schema management, data ingestion, data lake storage, ETL processing, and data warehousing",
            "Designed distributed telemetry data system handling logs, metrics, and crash information from internal systems, game clients, and servers",
            "Founded company's observability engineering discipline and scaled team operations across multiple partner studios",
            "Built comprehensive data infrastructure supporting multiple game development studios simultaneously",
        ],
        technologies: &[
            "Team Management",
            "Cloud Architecture",
            "Data Analytics",
            "Schema Management",
            "Data Lake",
            "ETL",
            "Data Warehousing",
            "Observability Engineering",
        ],
        website: None,
        logo: Some("/logos/probablymonsters.svg"),
    },
    Experience {
        title: "Software Engineer, Product Owner",
        company: "Bungie",
        period: "April 2016 - May 2018",
        location: "Bellevue, WA",
        kind: "Full-time",
        color: "from-blue-600 to-indigo-600",
        icon: Icon::Target,
        description: "Led data platform strategy and managed production infrastructure for Destiny franchise.",
        achievements: &[
            "Led long-term roadmap and prioritization for Data Platforms Team supporting scalable data infrastructure for Destiny franchise",
            "Managed production Hadoop, Elasticsearch, and Redis clusters with focus on performance tuning and high availability",
            "Collaborated with engineering and studio leadership to align data platform strategy with business objectives",
            "Designed innovative data solutions and pipelines for evolving gaming franchise requirements",
            "Ensured SLA compliance and monitoring for mission-critical gaming infrastructure",
        ],
        technologies: &[
            "Hadoop",
            "Elasticsearch",
            "Redis",
            "Performance Tuning",
            "High Availability",
            "Data Platform Strategy",
            "Product Management",
        ],
        website: None,
        logo: Some("/logos/bungie.svg"),
    },
    Experience {
        title: "Destiny Operations Lead",
        company: "Bungie",
        period: "November 2013 - April 2016",
        location: "Bellevue, WA",
        kind: "Operations",
        color: "from-yellow-600 to-orange-600",
        icon: Icon::Settings,
        description: "Led 24/7 operations center monitoring all infrastructure supporting Destiny games.",
        achievements: &[
            "Led 24/7 Destiny Operations Center monitoring all data center infrastructure supporting Destiny games",
            "Developed processes, procedures, and tools ensuring SLA compliance and high-quality player experience",
            "Built automation and monitoring for big data pipelines including real-time social media ingestion from Twitter and Reddit",
            "Created real-time data analysis and visualization tools for operational insights",
            "Managed critical gaming infrastructure serving millions of players worldwide",
        ],
        technologies: &[
            "24/7 Operations",
            "Infrastructure Monitoring",
            "SLA Management",
            "Big Data Pipelines",
            "Real-time Analytics",
            "Social Media Integration",
        ],
        website: None,
        logo: Some("/logos/bungie.svg"),
    },
    Experience {
        title: "Data Migration Software Engineer",
        company: "LawLogix",
        period: "May 2012 - August 2013",
        location: "Seattle, WA",
        kind: "Full-time",
        color: "from-purple-600 to-blue-600",
        icon: Icon::Database,
        description: "Engineered data migration solutions and enterprise integrations.",
        achievements: &[
            "Engineered robust data migration solutions for transforming client data to LawLogix Guardian platform",
            "Developed automation software using Python, Bash, and 4D for enterprise data migrations",
            "Led Oracle Taleo integration with LawLogix Guardian using SOAP web services",
            "Architected Django-driven data migration system replacing legacy 4D codebase",
        ],
        technologies: &[
            "Data Migration",
            "Python",
            "Bash",
            "4D",
            "Django",
            "Oracle Taleo",
            "SOAP Web Services",
            "Legacy System Modernization",
        ],
        website: None,
        logo: None,
    },
    Experience {
        title: "Software Developer",
        company: "Cognizant Technology Solutions",
        period: "January 2011 - May 2012",
        location: "Seattle, WA",
        kind: "Full-time",
        color: "from-teal-600 to-green-600",
        icon: Icon::Cloud,
        description: "Developed cloud infrastructure and monitoring systems for high-traffic analytical platforms.",
        achievements: &[
            "Developed cloud infrastructure for high-traffic analytical business data using Hadoop, MapReduce, Hive, Pentaho, and AWS",
            "Built comprehensive monitoring system with customized Zenoss including full failover support for data center outages",
            "Worked in fast-paced Agile environment serving top international search engine company",
            "Implemented scalable solutions for big data processing and analytics",
        ],
        technologies: &[
            "Hadoop",
            "MapReduce",
            "Hive",
            "Pentaho",
            "AWS",
            "Zenoss",
            "Agile Development",
            "Big Data Analytics",
        ],
        website: None,
        logo: None,
    },
];

pub const EDUCATION: Education = Education {
    role: "Research Assistant",
    institution: "University of Arizona Computer Vision Lab",
    period: "2007 - 2010",
    description: "Developed dynamic string matching algorithms for presentation slide and speech recognition alignment.",
    publication: "Published research: \"Improving and aligning speech with presentation slides,\" International Conference on Pattern Recognition 2010 (ICPR)",
    topics: &[
        "Computer Vision",
        "String Matching Algorithms",
        "Speech Recognition",
        "Research Publication",
    ],
};
