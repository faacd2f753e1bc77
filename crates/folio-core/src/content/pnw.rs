//! Pacific Northwest family trip.

use crate::{
    icon::Icon,
    state::Location,
    trip::{
        Accommodation, ActivityDetail, ActivityGroup, AnytimeActivity, BookingWindow, BudgetLine,
        DetailCatalog, DiningGuide, Direction, Highlight, KeyAddress, LocationActivities,
        PackingGroup, Restaurant, RestaurantGroup, ScheduleDay, Trip, TripSummary, Weather,
    },
};

pub const SLUG: &str = "pacific-northwest-family-adventure";

pub const DETAILS: &[ActivityDetail] = &[
    // Whidbey
    ActivityDetail {
        name: "Deception Pass Bridge",
        description: "One of the most photographed bridges in America, spanning 180 feet above the swirling waters below.",
        details: &[
            "Free to visit, open 24/7",
            "Multiple pullouts for photos",
            "Walk across on sidewalks for spectacular views",
            "North and South beach access nearby",
            "Tide pools and hiking trails available",
        ],
        location: Some("Highway 20, between Oak Harbor and Anacortes"),
        contact: None,
        hours: None,
        tips: Some("Best visited early morning or late afternoon for photos. Can be windy!"),
        guides: &[],
    },
    ActivityDetail {
        name: "Windjammer Park",
        description: "Beautiful waterfront park with a 1-mile fully accessible trail perfect for all abilities.",
        details: &[
            "Wheelchair and stroller friendly",
            "Spectacular views of Penn Cove and Olympic Mountains",
            "Benches throughout for resting",
            "Playground for kids",
            "Covered picnic areas",
        ],
        location: Some("Windjammer Way, Oak Harbor"),
        contact: None,
        hours: None,
        tips: Some("Great for sunset walks. Bring binoculars for seal and bird watching."),
        guides: &[],
    },
    ActivityDetail {
        name: "Penn Cove",
        description: "Large saltwater cove famous for Penn Cove mussels and excellent bird watching.",
        details: &[
            "Important Bird Area (IBA) designation",
            "Home to 211+ bird species",
            "Best spots: Coupeville Wharf, Keystone Landing",
            "Harbor seals and gray whales visible seasonally",
            "Historic waterfront with shops and restaurants",
        ],
        location: Some("Coupeville waterfront area"),
        contact: None,
        hours: None,
        tips: Some("Low tide offers best wildlife viewing. Bring spotting scope if you have one."),
        guides: &[],
    },
    ActivityDetail {
        name: "Meerkerk Gardens",
        description: "Whidbey Island's premier rhododendron garden with 53 acres of woodland gardens and trails.",
        details: &[
            "Admission: $10 adults, kids under 13 free",
            "Open 9am-5pm daily",
            "Dogs on leash welcome",
            "10 acres of display gardens",
            "43 acres of forest preserve",
            "Peak bloom: April-May for rhododendrons",
            "Wheelchair accessible paths available",
        ],
        location: Some("3659 Meerkerk Lane, Greenbank"),
        contact: Some("360-678-1912"),
        hours: None,
        tips: Some("Bring water and comfortable shoes. Allow 2-3 hours for full experience."),
        guides: &[],
    },
    ActivityDetail {
        name: "Paint Your World",
        description: "Paint-your-own pottery studio perfect for creating family memories and souvenirs.",
        details: &[
            "No studio fees ever",
            "Glass fusing and canvas painting also available",
            "Can ship finished pieces to your home",
            "Espresso bar and smoothies on site",
            "Great for all ages and skill levels",
            "Birthday party packages available",
        ],
        location: Some("860 SE Pioneer Way Ste 102, Oak Harbor"),
        contact: Some("Book online at paintyourworld.net"),
        hours: None,
        tips: Some("Pottery takes 5-7 days to fire, so plan early in trip or use shipping service."),
        guides: &[],
    },
    // Leavenworth
    ActivityDetail {
        name: "Colchuck Lake",
        description: "Premier alpine lake hike showcasing crystal-clear waters surrounded by dramatic granite peaks.",
        details: &[
            "8.7 miles round trip, 2,300 feet elevation gain",
            "Difficulty: Hard",
            "Trailhead: Stuart Lake Trailhead",
            "Northwest Forest Pass required ($5/day)",
            "Free day-use wilderness permit at trailhead",
            "Best months: July-October",
            "No dogs allowed",
            "Arrive before 7am for parking",
        ],
        location: Some("8 miles from Leavenworth via Icicle Creek Road"),
        contact: None,
        hours: None,
        tips: Some("Bring bug spray, lunch, and layers. Snow possible into July. This is THE hike for mountain lovers!"),
        guides: &[],
    },
    ActivityDetail {
        name: "Fly Fishing",
        description: "World-class fly fishing on the Icicle River and Wenatchee River with experienced guides.",
        details: &[
            "Half-day trips: $250-350 per person",
            "Full-day trips: $400-500 per person",
            "All equipment and instruction included",
            "Washington State License required (buy online)",
            "Best spots: Icicle Creek, Wenatchee River",
            "Species: Rainbow trout, cutthroat, salmon (seasonal)",
            "Guides provide lunch on full-day trips",
        ],
        location: None,
        contact: None,
        hours: None,
        tips: Some("Book 2-3 weeks ahead for summer. Early morning trips are best."),
        guides: &[
            "Family Lines Fly Fishing: 206-506-6286",
            "Wenatchee Fly Co: 509-670-7157",
            "Northwest Fly-Fishing Academy: 206-506-6286",
        ],
    },
    ActivityDetail {
        name: "München Haus",
        description: "Authentic Bavarian beer garden with outdoor seating and mountain views.",
        details: &[
            "Famous for bratwurst and pretzels",
            "Over 20 German beers on tap",
            "Dog-friendly outdoor seating",
            "Live music on weekends",
            "No reservations - first come, first served",
            "Cash and card accepted",
            "Kid-friendly with games",
        ],
        location: Some("709 Front St, Leavenworth"),
        contact: None,
        hours: Some("Daily 11am-9pm (summer)"),
        tips: Some("Peak times are 12-2pm and 5-7pm. Great people watching on Front Street."),
        guides: &[],
    },
];

const WHIDBEY_GROUPS: &[ActivityGroup] = &[
    ActivityGroup {
        title: "Outdoor Adventures",
        icon: Icon::Mountain,
        items: &[
            "Deception Pass Bridge - Spectacular views",
            "Windjammer Park - 1-mile accessible trail",
            "Joseph Whidbey State Park - 2.5-mile loop",
            "Beach access at North Beach, Fort Casey",
            "Scenic drives: Ebey's Landing, West Beach",
            "Biking routes along waterfront",
        ],
    },
    ActivityGroup {
        title: "Museums & Culture",
        icon: Icon::Camera,
        items: &[
            "Pacific Northwest Naval Air Museum",
            "Coupeville Historic Walking Tour - 65 sites",
            "Garry Oak Gallery - 25 local artists",
            "Wine tasting at Ott & Hunter Wines",
            "Island County Historical Museum",
            "Master Gardener Demonstration Gardens",
        ],
    },
    ActivityGroup {
        title: "Nature & Wildlife",
        icon: Icon::Bird,
        items: &[
            "Penn Cove - Bird watching, 211+ species",
            "Deer Lagoon Preserve - Important Bird Area",
            "Meerkerk Gardens - Rhododendron showcase",
            "Bayview Garden - 30-year family nursery",
            "Whidbey Audubon Society - Free bird lists",
            "Ebey's Landing - Prairie and bluff trails",
        ],
    },
    ActivityGroup {
        title: "Arts & Crafts",
        icon: Icon::Palette,
        items: &[
            "Paint Your World - Pottery painting studio",
            "Whidbey Clay Center - Community studio",
            "Ishler Pottery Studio - Functional pieces",
            "Penn Cove Pottery - Waterfront location",
            "Cultus Bay Gardens - Floral arranging classes",
            "Local art galleries in Coupeville",
        ],
    },
];

const LEAVENWORTH_GROUPS: &[ActivityGroup] = &[
    ActivityGroup {
        title: "Outdoor Adventures",
        icon: Icon::Mountain,
        items: &[
            "Colchuck Lake - 8.7 miles, premier alpine hike",
            "Waterfront Park Trail - 3 miles flat riverside",
            "Apple Capital Loop - 22 miles paved biking",
            "River tubing on Wenatchee River",
            "Fly Fishing - Guided trips available",
            "Icicle River Nature Trail - Wheelchair accessible",
        ],
    },
    ActivityGroup {
        title: "Bavarian Culture",
        icon: Icon::Camera,
        items: &[
            "Nutcracker Museum - 7,000 piece collection",
            "Greater Leavenworth Museum - Town history",
            "Front Street Bavarian shopping",
            "Art galleries downtown",
            "Leavenworth Adventure Park - Alpine coaster",
        ],
    },
    ActivityGroup {
        title: "Wine & Beer",
        icon: Icon::Wine,
        items: &[
            "Patterson Cellars - Downtown, $25 tasting",
            "Stein Beer Hall - 55 beers on tap",
            "Icicle Ridge Winery - Log building views",
            "Silvara Cellars - Hilltop Cascade views",
            "Eagle Creek Winery - Family-owned",
            "Wine shuttle tours available",
        ],
    },
    ActivityGroup {
        title: "Gardens & Nature",
        icon: Icon::TreePine,
        items: &[
            "Ohme Gardens - Alpine rock garden, Wenatchee",
            "Leavenworth National Fish Hatchery",
            "Blackbird Island Trail - 1-mile paved loop",
            "Wenatchee River trails - Bird watching",
            "Mountain wildflower hikes",
            "Tumwater Canyon scenic drive",
        ],
    },
];

const WHIDBEY_DINING: &[RestaurantGroup] = &[
    RestaurantGroup {
        title: "Casual Favorites",
        restaurants: &[
            Restaurant {
                name: "Island Cafe",
                address: Some("1542 NE 7th Ave"),
                blurb: "All-day breakfast, comfort food, local favorite",
                detail_key: None,
            },
            Restaurant {
                name: "The Mill at The Kasteel",
                address: None,
                blurb: "Mexican-American fusion, homemade tortillas",
                detail_key: None,
            },
            Restaurant {
                name: "Chris' Bakery",
                address: None,
                blurb: "Since 1943, fresh pastries, must-try donuts",
                detail_key: None,
            },
            Restaurant {
                name: "Flyers Restaurant & Brewery",
                address: None,
                blurb: "Craft beers, fresh seafood, beer garden",
                detail_key: None,
            },
        ],
    },
    RestaurantGroup {
        title: "Special Occasions",
        restaurants: &[
            Restaurant {
                name: "Inn at Langley",
                address: Some("400 1st St, Langley"),
                blurb: "Prix fixe menu, $95-125pp, reserve 2-3 weeks ahead",
                detail_key: None,
            },
            Restaurant {
                name: "Frasers Gourmet Hideaway",
                address: None,
                blurb: "Oak Harbor's premier, weekend reservations recommended",
                detail_key: None,
            },
            Restaurant {
                name: "Front Street Grill",
                address: Some("Coupeville"),
                blurb: "Penn Cove mussels, waterfront dining",
                detail_key: None,
            },
        ],
    },
];

const LEAVENWORTH_DINING: &[RestaurantGroup] = &[
    RestaurantGroup {
        title: "German Essentials",
        restaurants: &[
            Restaurant {
                name: "München Haus",
                address: Some("709 Front St"),
                blurb: "Beer garden, no reservations, dog-friendly",
                detail_key: Some("München Haus"),
            },
            Restaurant {
                name: "Andreas Keller",
                address: None,
                blurb: "Authentic atmosphere, weekend reservations crucial",
                detail_key: None,
            },
            Restaurant {
                name: "Ludwig's",
                address: None,
                blurb: "Live polka Saturdays, famous Schweinshax'n",
                detail_key: None,
            },
            Restaurant {
                name: "Café Mozart",
                address: None,
                blurb: "Fine European, 1,600-bottle wine cellar",
                detail_key: None,
            },
        ],
    },
    RestaurantGroup {
        title: "Non-German Options",
        restaurants: &[
            Restaurant {
                name: "JJ Hills Restaurant",
                address: None,
                blurb: "Lodge atmosphere, mountain-view outdoor seating",
                detail_key: None,
            },
            Restaurant {
                name: "Fresh Burger Cafe",
                address: None,
                blurb: "Gourmet burgers, vegetarian options",
                detail_key: None,
            },
            Restaurant {
                name: "Gustav's Grill",
                address: None,
                blurb: "American fare, family-friendly",
                detail_key: None,
            },
        ],
    },
];

pub const TRIP: Trip = Trip {
    summary: TripSummary {
        title: "Pacific Northwest Family Adventure",
        location: "Whidbey Island & Leavenworth, WA",
        description: "Complete family itinerary with fishing charters, alpine hiking, Bavarian culture, and island exploration. Includes detailed activities, restaurant guides, and insider tips.",
        duration: "8 days",
        dates: "July 26 - Aug 3",
        group_size: "7 family members",
        link: "/trips/pacific-northwest-family-adventure",
        icon: Icon::Mountain,
        image: Some("/pnw-trip.png"),
    },
    subtitle: "Whidbey Island & Leavenworth",
    full_dates: "July 26 - August 3, 2025",
    party: "7 Family Members",
    bases: "Oak Harbor & Leavenworth, WA",
    schedule: &[
        ScheduleDay {
            date: "Saturday, July 26",
            icon: Icon::Plane,
            events: &[
                "Morning: Pick up at Sea-Tac (~9am)",
                "From Airport: Head to home in Lake Forest Park",
                "Afternoon: Check into Oak Harbor Airbnb",
            ],
        },
        ScheduleDay {
            date: "Monday, July 28",
            icon: Icon::Fish,
            events: &["6:00 AM: Fishing Charter (already booked)"],
        },
        ScheduleDay {
            date: "Sun 7/27 OR Tue 7/29",
            icon: Icon::Users,
            events: &["Cousin visit for lunch/dinner"],
        },
        ScheduleDay {
            date: "Wednesday, July 30",
            icon: Icon::Car,
            events: &["Depart Oak Harbor → Drive to Leavenworth"],
        },
        ScheduleDay {
            date: "Sunday, August 3",
            icon: Icon::Plane,
            events: &["Early departure for Sea-Tac (9am flights)"],
        },
    ],
    weather: Weather {
        headline: "Perfect Summer Weather",
        summary: "Expect highs of 66-75°F with minimal rain. Long daylight hours (sunrise 5:24am, sunset 9:08pm). Pack layers for cool evenings and bring sun protection!",
        forecast_url: "https://weather.com/weather/tenday/l/Oak+Harbor+WA",
        call_to_action: "Check the current forecast",
    },
    highlights: &[
        Highlight {
            title: "Mountain Adventures",
            subtitle: "Alpine lakes & trails",
            icon: Icon::Mountain,
            tone: "green",
        },
        Highlight {
            title: "Fishing Experiences",
            subtitle: "Charter & fly fishing",
            icon: Icon::Fish,
            tone: "blue",
        },
        Highlight {
            title: "Arts & Culture",
            subtitle: "Museums & galleries",
            icon: Icon::Palette,
            tone: "purple",
        },
        Highlight {
            title: "Gardens & Nature",
            subtitle: "53 acres of gardens",
            icon: Icon::TreePine,
            tone: "pink",
        },
    ],
    activities: &[
        LocationActivities {
            location: Location::Whidbey,
            groups: WHIDBEY_GROUPS,
        },
        LocationActivities {
            location: Location::Leavenworth,
            groups: LEAVENWORTH_GROUPS,
        },
    ],
    anytime: &[
        AnytimeActivity {
            title: "Pickleball",
            icon: Icon::Activity,
            description: "Oak Harbor Park (4 courts) & Osborn Elementary in Leavenworth",
        },
        AnytimeActivity {
            title: "Indoor Fun",
            icon: Icon::Heart,
            description: "Board games, cards, puzzles, movie nights, cooking together",
        },
        AnytimeActivity {
            title: "Evening Activities",
            icon: Icon::Star,
            description: "Sunset watching (9pm!), stargazing, happy hour at the Airbnb",
        },
    ],
    dining: &[
        DiningGuide {
            location: Location::Whidbey,
            groups: WHIDBEY_DINING,
        },
        DiningGuide {
            location: Location::Leavenworth,
            groups: LEAVENWORTH_DINING,
        },
    ],
    accommodations: &[
        Accommodation {
            location: Location::Whidbey,
            name: "Oak Harbor Airbnb",
            address: "2333 Happy Ln, Oak Harbor, WA 98277",
            check_in: "July 26, afternoon",
            check_out: "July 30, morning",
            notes: "Close to Windjammer Park and downtown",
        },
        Accommodation {
            location: Location::Leavenworth,
            name: "Leavenworth Airbnb",
            address: "Christensen Rd, Leavenworth, WA 98826",
            check_in: "July 30, afternoon",
            check_out: "August 3, morning",
            notes: "Mountain views, close to downtown",
        },
    ],
    key_address: KeyAddress {
        label: "Mike & Natalie's House (Stop After Airport)",
        address: "3110 NE 185th St, Lake Forest Park, WA 98155",
        note: "First stop from Sea-Tac before heading to Oak Harbor",
    },
    directions: &[
        Direction {
            route: "Sea-Tac to Oak Harbor",
            description: "~2 hours via I-5 N and WA-20 W. Stop at Deception Pass Bridge for photos!",
        },
        Direction {
            route: "Oak Harbor to Leavenworth",
            description: "~3.5 hours via WA-20 E, I-5 S, and US-2 E. Scenic route through Cascade Mountains.",
        },
        Direction {
            route: "Leavenworth to Sea-Tac",
            description: "~2.5 hours via US-2 W and I-5 S. Leave by 6:30am for 9am flights.",
        },
    ],
    flexible_note: "This trip is designed as a \"menu of options\" rather than a rigid schedule. Each morning, choose activities based on weather, energy levels, and what sounds fun! Only the items in the Fixed Schedule are set in stone.",
    booking: &[
        BookingWindow {
            title: "2-3 Weeks Before Trip",
            icon: Icon::Clock,
            tone: "orange",
            tasks: &[
                "Restaurant reservations for special dinners",
                "Fly fishing guide bookings",
                "Wine tasting reservations for groups of 6+",
            ],
        },
        BookingWindow {
            title: "Week Before Trip",
            icon: Icon::Phone,
            tone: "yellow",
            tasks: &[
                "Confirm all reservations",
                "Check weather forecast",
                "Buy Washington State fishing licenses online",
            ],
        },
    ],
    packing: &[
        PackingGroup {
            title: "Clothing & Gear",
            items: &[
                "Layers for 66-75°F days, cool evenings",
                "Rain jacket (just in case)",
                "Comfortable walking shoes",
                "Hiking boots (for Colchuck Lake)",
                "Swimsuit for river activities",
            ],
        },
        PackingGroup {
            title: "Activity Items",
            items: &[
                "Pickleball paddles & balls",
                "Board games & cards",
                "Binoculars for bird/whale watching",
                "Camera with extra batteries",
                "Day pack for hiking",
            ],
        },
        PackingGroup {
            title: "Essentials",
            items: &[
                "Sun protection (hat, sunscreen, sunglasses)",
                "Blankets for outdoor activities",
                "Reusable water bottles",
                "Bug spray for hiking",
            ],
        },
    ],
    budget: &[
        BudgetLine {
            item: "Casual Meals",
            cost: "$15-25/person",
        },
        BudgetLine {
            item: "Upscale Dining",
            cost: "$35-60/person",
        },
        BudgetLine {
            item: "Wine Tasting",
            cost: "$10-25/person",
        },
        BudgetLine {
            item: "Museums",
            cost: "$5-15/person",
        },
        BudgetLine {
            item: "Garden Admission",
            cost: "$10/person",
        },
        BudgetLine {
            item: "Fly Fishing Guide",
            cost: "$250-500/person",
        },
        BudgetLine {
            item: "Parking Pass",
            cost: "$5/day or $30/annual",
        },
    ],
    free_activities: "Beaches, most trails, scenic drives, historic downtown areas, window shopping, pickleball courts",
    passes: &[
        "Northwest Forest Pass: $5/day or $30/annual (some trailheads)",
        "WA State Discover Pass: $30/annual (state parks)",
        "WA Fishing License: Buy online at wdfw.wa.gov",
    ],
    details: DetailCatalog::new(DETAILS),
    farewell: "Have an Amazing Pacific Northwest Adventure!",
    footnote: "Questions? Let's discuss at our morning planning sessions over coffee ☕",
};
