// src/models/content.rs
// DOCUMENTATION: Static temple content shown on the informational pages
// PURPOSE: Schedule, events, history and contact details in one place

/// One aarti in the daily schedule
#[derive(Debug, Clone, Copy)]
pub struct AartiSlot {
    pub name: &'static str,
    pub name_hi: &'static str,
    /// Time range, e.g. "5:00 AM - 5:30 AM"
    pub time: &'static str,
    /// Short line used in the home page preview
    pub summary: &'static str,
    pub description: &'static str,
    pub significance: &'static str,
    /// Shown in the home page preview
    pub featured: bool,
}

impl AartiSlot {
    /// Start of the time range
    pub fn start_time(&self) -> &'static str {
        self.time.split(" - ").next().unwrap_or(self.time)
    }
}

pub const AARTI_SCHEDULE: [AartiSlot; 6] = [
    AartiSlot {
        name: "Mangla Aarti",
        name_hi: "मंगला आरती",
        time: "5:00 AM - 5:30 AM",
        summary: "Morning awakening ceremony",
        description: "The awakening ceremony where the deity is gently awakened from rest. Devotees offer prayers for an auspicious start to the day.",
        significance: "Removes darkness and brings divine light",
        featured: true,
    },
    AartiSlot {
        name: "Shringar Aarti",
        name_hi: "श्रृंगार आरती",
        time: "7:30 AM - 8:00 AM",
        summary: "Decoration and offering ceremony",
        description: "The deity is beautifully decorated with flowers, ornaments, and fresh attire. A visual feast of divine splendor.",
        significance: "Celebrates divine beauty and grace",
        featured: true,
    },
    AartiSlot {
        name: "Raj Bhog Aarti",
        name_hi: "राजभोग आरती",
        time: "12:00 PM - 12:30 PM",
        summary: "Midday offering of food",
        description: "The grand midday offering includes elaborate preparations of 56 varieties of food (Chhappan Bhog) for the Lord.",
        significance: "Offering of love through sacred food",
        featured: true,
    },
    AartiSlot {
        name: "Utthapan Aarti",
        name_hi: "उत्थापन आरती",
        time: "4:00 PM - 4:30 PM",
        summary: "Afternoon awakening",
        description: "The deity awakens from afternoon rest. A brief ceremony marking the transition to evening prayers.",
        significance: "Renewal of spiritual energy",
        featured: false,
    },
    AartiSlot {
        name: "Sandhya Aarti",
        name_hi: "संध्या आरती",
        time: "6:30 PM - 7:00 PM",
        summary: "Evening prayer ceremony",
        description: "The most popular evening aarti with melodious bhajans, conch shells, and bells creating a divine atmosphere.",
        significance: "Union of day and night in divine light",
        featured: true,
    },
    AartiSlot {
        name: "Shayan Aarti",
        name_hi: "शयन आरती",
        time: "8:30 PM - 9:00 PM",
        summary: "Night rest ceremony",
        description: "The final ceremony of the day where the deity is prepared for rest. A peaceful conclusion to daily worship.",
        significance: "Peaceful rest and gratitude",
        featured: true,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TempleEvent {
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

pub const UPCOMING_EVENTS: [TempleEvent; 4] = [
    TempleEvent {
        title: "Janmashtami Mahotsav",
        date: "August 26, 2025",
        description: "Grand celebration of Lord Krishna's birth with midnight aarti and festivities.",
    },
    TempleEvent {
        title: "Radha Ashtami",
        date: "September 3, 2025",
        description: "Divine celebration honoring Shri Radha Rani with special decorations.",
    },
    TempleEvent {
        title: "Sharad Purnima",
        date: "October 13, 2025",
        description: "Moonlit celebration with kheer offering and Raas Leela performances.",
    },
    TempleEvent {
        title: "Govardhan Puja",
        date: "November 2, 2025",
        description: "Annakut celebration with 56 varieties of food offerings to the deity.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HISTORY: [Milestone; 6] = [
    Milestone {
        year: "1850",
        title: "Foundation Laid",
        description: "The sacred land was identified by revered saints who felt divine energy at this location.",
    },
    Milestone {
        year: "1875",
        title: "Temple Construction",
        description: "Master craftsmen from Rajasthan began constructing the temple using traditional Vastu principles.",
    },
    Milestone {
        year: "1890",
        title: "Deity Installation",
        description: "The beautiful deities of Radha-Krishna were installed with elaborate Vedic ceremonies.",
    },
    Milestone {
        year: "1950",
        title: "Trust Formation",
        description: "Jagdish Temple Trust was established to manage temple affairs and community services.",
    },
    Milestone {
        year: "2000",
        title: "Renovation",
        description: "Major renovation restored the temple to its original glory with modern facilities.",
    },
    Milestone {
        year: "Present",
        title: "Serving Devotees",
        description: "Continuing the legacy of devotion, serving thousands of devotees annually.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Traditional Architecture",
        description: "Built in the classic Nagara style with intricate stone carvings depicting scenes from Krishna Leela.",
    },
    Feature {
        title: "Spiritual Programs",
        description: "Daily aarti, weekly satsang, monthly celebrations, and annual festivals bring the community together.",
    },
    Feature {
        title: "Community Service",
        description: "Free prasad distribution, educational programs, and charitable activities for the underprivileged.",
    },
    Feature {
        title: "Vedic Learning",
        description: "Classes on Bhagavad Gita, Sanskrit, and traditional arts keep our heritage alive.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactDetail {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const CONTACT_DETAILS: [ContactDetail; 4] = [
    ContactDetail {
        title: "Temple Address",
        lines: &["Jagdish Chowk, Udaipur", "Rajasthan, India - 313001"],
    },
    ContactDetail {
        title: "Phone",
        lines: &["+91 7878512551"],
    },
    ContactDetail {
        title: "Email",
        lines: &["kanishkrajsinghjhala@gmail.com"],
    },
    ContactDetail {
        title: "Temple Timings",
        lines: &["Morning: 5:00 AM - 12:00 PM", "Evening: 4:00 PM - 9:00 PM"],
    },
];

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3536.4607093953843!2d77.66661841505757!3d27.574892482841477!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x39736ce47bffc039%3A0xfe5fc3e96512c21c!2sBanke%20Bihari%20Temple!5e0!3m2!1sen!2sin!4v1635000000000!5m2!1sen!2sin";

/// Image in the home page gallery preview, served from /assets
#[derive(Debug, Clone, Copy)]
pub struct PreviewTile {
    pub src: &'static str,
    pub alt: &'static str,
    pub wide: bool,
}

pub const GALLERY_PREVIEW: [PreviewTile; 6] = [
    PreviewTile { src: "/assets/gallery/temple-interior.jpeg", alt: "Temple Interior", wide: true },
    PreviewTile { src: "/assets/gallery/janmashtami.jpeg", alt: "Janmashtami Celebration", wide: false },
    PreviewTile { src: "/assets/gallery/morning-ritual.jpeg", alt: "Morning Ritual", wide: false },
    PreviewTile { src: "/assets/gallery/diwali.jpeg", alt: "Diwali Celebration", wide: false },
    PreviewTile { src: "/assets/gallery/evening-aarti.jpg", alt: "Evening Aarti", wide: false },
    PreviewTile { src: "/assets/gallery/radha-krishna.jpeg", alt: "Radha Krishna", wide: true },
];
