//! Marketing copy for the landing page sections.

pub struct Difference {
    pub title: &'static str,
    pub line: &'static str,
    pub icon: &'static str,
    pub image: &'static str,
    pub features: [&'static str; 3],
}

pub const DIFFERENCES: [Difference; 5] = [
    Difference {
        title: "Private Lockable Cabins",
        line: "Privacy is luxury. Unlike shared chaos, Limelight offers lockable cabins that give you ownership, not just access.",
        icon: "fa-solid fa-lock",
        image: "https://th.bing.com/th/id/OIP.a2U06iK3CUQZG7Bm9WZ-EwHaE8?o=7rm=3&rs=1&pid=ImgDetMain&o=7&rm=3",
        features: [
            "Fully enclosed, sound-dampened spaces",
            "Personal climate and light control",
            "24/7 exclusive, secure access",
        ],
    },
    Difference {
        title: "Calm, Acoustic Environment",
        line: "Productivity doesn’t live in noise. Every inch here is built to absorb chaos and amplify clarity.",
        icon: "fa-solid fa-volume-xmark",
        image: "https://carusoacoustic.com/wp-content/uploads/2019/11/Tonello-Energie-pannelli-fonoassorbenti-caruso-acoustic-05.jpg",
        features: [
            "Acoustically treated walls and ceilings",
            "Designated \"deep work\" and \"quiet\" zones",
            "Ambient soundscaping to mask distractions",
        ],
    },
    Difference {
        title: "Premium Experience, Honest Pricing",
        line: "What others call premium, we call standard. Our pricing reflects balance — not brand inflation.",
        icon: "fa-solid fa-badge-percent",
        image: "https://www.officeshub.com/wp-content/uploads/2024/06/3022-570x370.jpg",
        features: [
            "All-inclusive amenities (gourmet coffee, printing)",
            "No hidden fees or complex add-on charges",
            "Transparent, simple membership plans",
        ],
    },
    Difference {
        title: "Hospitality-Led Workspaces",
        line: "Coffee served to your desk, mail managed discreetly — you focus on work, we handle the rest.",
        icon: "fa-solid fa-mug-hot",
        image: "https://horizons-cdn.hostinger.com/118c51d3-a652-4f17-a483-dcecfe46add7/d6eb946d064434ad0c75744de9970521.jpg",
        features: [
            "On-site community manager and concierge",
            "At-your-desk beverage and snack service",
            "Professional mail and package handling",
        ],
    },
    Difference {
        title: "Culture Beyond Cubicles",
        line: "Work isn’t isolation. From wellness mornings to art nights, we build culture that nourishes.",
        icon: "fa-solid fa-users",
        image: "https://miro.medium.com/v2/resize:fit:1200/1*OZyU2jOc7yeWkoItXkPfww.jpeg",
        features: [
            "Curated wellness and mindfulness workshops",
            "Exclusive networking and speaker events",
            "Member-led clubs and social gatherings",
        ],
    },
];

/// Title, copy and icon class of a simple card.
pub struct Card {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

pub const JOURNEY_STEPS: [Card; 5] = [
    Card {
        title: "Discovery",
        text: "“You walk in seeking a desk…” A calm voice welcomes you — sunlight touches the floor, not your anxiety.",
        icon: "fa-solid fa-magnifying-glass",
    },
    Card {
        title: "Belonging",
        text: "“You find people who work like you think.” Quiet achievers, creators, founders — community without crowd.",
        icon: "fa-solid fa-users",
    },
    Card {
        title: "Focus",
        text: "“You sit, and silence begins to work with you.” The hum of design, not distraction. The power of stillness.",
        icon: "fa-solid fa-bullseye",
    },
    Card {
        title: "Flow",
        text: "“Ideas start to move again.” Coffee arrives. Thoughts align. Work becomes movement, not motion.",
        icon: "fa-solid fa-wind",
    },
    Card {
        title: "Clarity",
        text: "“And that’s when it hits you…” You didn’t just find a workspace. You found your rhythm.",
        icon: "fa-solid fa-wand-magic-sparkles",
    },
];

pub const AUDIENCES: [Card; 4] = [
    Card {
        title: "Founders & CXOs",
        text: "Private sanctuaries to think beyond the next quarter.",
        icon: "fa-solid fa-briefcase",
    },
    Card {
        title: "Creators & Freelancers",
        text: "Calm corners to craft stories that matter.",
        icon: "fa-solid fa-feather",
    },
    Card {
        title: "Consultants & Coaches",
        text: "Distraction-free cabins where clarity is currency.",
        icon: "fa-solid fa-brain",
    },
    Card {
        title: "Startups & Teams",
        text: "Collaborative zones built on respect, not noise.",
        icon: "fa-solid fa-building",
    },
];

pub const PILLARS: [Card; 4] = [
    Card {
        title: "Design",
        text: "Ergonomic, aesthetic, human.",
        icon: "fa-solid fa-palette",
    },
    Card {
        title: "Privacy",
        text: "Lockable cabins, acoustic panels, secure connectivity.",
        icon: "fa-solid fa-lock",
    },
    Card {
        title: "Service",
        text: "Gourmet coffee, order-at-table, full-time support.",
        icon: "fa-solid fa-mug-hot",
    },
    Card {
        title: "Culture",
        text: "Wellness mornings, cultural evenings, curated community.",
        icon: "fa-solid fa-users",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "From cluttered cafes to creative clarity.",
        author: "Freelance Designer",
        image: "https://media.istockphoto.com/id/1415537841/photo/asian-graphic-designer-working-in-office-artist-creative-designer-illustrator-graphic-skill.webp?a=1&b=1&s=612x612&w=0&k=20",
    },
    Testimonial {
        quote: "A founder who finally found flow.",
        author: "Startup Founder",
        image: "https://tse4.mm.bing.net/th/id/OIP.mD-LNfTlPD6jEfnKo8NiPgHaEt?w=1920&h=1222&rs=1&pid=ImgDetMain&o=7&rm=3",
    },
    Testimonial {
        quote: "A consultant who stopped outsourcing peace.",
        author: "Management Consultant",
        image: "https://tse2.mm.bing.net/th/id/OIP.YVyKfKEGsUwX8URVja5YGgHaHa?rs=1&pid=ImgDetMain&o=7&rm=3",
    },
    Testimonial {
        quote: "A team that now works together, not over each other.",
        author: "Agency Director",
        image: "https://tse3.mm.bing.net/th/id/OIP.fzHXOqrCyHEkkzXw-CIhaQHaE7?rs=1&pid=ImgDetMain&o=7&rm=3",
    },
];

pub const HERO_IMAGE: &str =
    "https://horizons-cdn.hostinger.com/118c51d3-a652-4f17-a483-dcecfe46add7/ba08e140db0e32ef5331c88741fb66dd.jpg";
pub const PHILOSOPHY_IMAGE: &str =
    "https://horizons-cdn.hostinger.com/118c51d3-a652-4f17-a483-dcecfe46add7/eb74bf5a980d17ff9749602eccd029ab.jpg";
pub const LOGO_IMAGE: &str =
    "https://content.app-sources.com/s/440505660917891941/uploads/Gyansetu/Limelight_logo1-1644628.png?format=webp";

pub const CONTACT_PHONE: (&str, &str) = ("+917835831331", "+91 78358 31331");
pub const CONTACT_EMAIL: &str = "info@limelightbypayleaf.com";
pub const ADDRESS_LINES: [&str; 2] = ["Lotus Business Park", "Sector 127, Noida"];
