//! Literal content rendered by the pages.

use chrono::NaiveDate;

use crate::types::{
    ContactDetails, Event, GalleryItem, Plan, Service, SocialLink, Stat, TeamMember, Testimonial,
};

pub const FALLBACK_IMAGE: &str = "/images/placeholder.svg";

/// Phrases cycled by the typewriter in the home hero.
pub const HERO_PHRASES: &[&str] = &[
    "video creators.",
    "podcasters.",
    "streamers.",
    "writers and illustrators.",
    "everyone who makes things online.",
];

pub const STATS: &[Stat] = &[
    Stat { value: "2,400+", label: "Members" },
    Stat { value: "180", label: "Events hosted" },
    Stat { value: "35", label: "Partner brands" },
    Stat { value: "12", label: "Cities" },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Mentorship",
        summary: "One-to-one sessions with established creators who have grown the kind of channel you want to build.",
        highlights: &["Monthly mentor calls", "Portfolio and channel reviews", "Career planning"],
    },
    Service {
        title: "Studio Access",
        summary: "Bookable studio time with lighting, sound treatment and cameras so production never blocks publishing.",
        highlights: &["Podcast booths", "Green screen stage", "Editing suites"],
    },
    Service {
        title: "Brand Partnerships",
        summary: "We introduce members to brands looking for authentic collaborations and help negotiate fair terms.",
        highlights: &["Vetted sponsors", "Contract templates", "Rate benchmarks"],
    },
    Service {
        title: "Workshops",
        summary: "Hands-on sessions on storytelling, analytics, thumbnails, monetization and staying healthy while creating.",
        highlights: &["Weekly online classes", "Recorded library", "Certificates"],
    },
    Service {
        title: "Legal & Rights Desk",
        summary: "Guidance on copyright claims, licensing music and footage, and protecting your own work.",
        highlights: &["Takedown support", "Licensing checklists", "Partner lawyers"],
    },
    Service {
        title: "Community",
        summary: "Local chapters, online channels and collab boards where members find co-hosts, editors and friends.",
        highlights: &["City chapters", "Collab board", "Peer feedback circles"],
    },
];

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Community",
        monthly_price: 0,
        tagline: "For anyone starting out.",
        features: &["Online community access", "Monthly newsletter", "Public events"],
        highlighted: false,
    },
    Plan {
        name: "Creator",
        monthly_price: 15,
        tagline: "For creators publishing every week.",
        features: &[
            "Everything in Community",
            "Workshop library",
            "4 studio hours per month",
            "Member-only events",
        ],
        highlighted: true,
    },
    Plan {
        name: "Studio",
        monthly_price: 39,
        tagline: "For teams and full-time creators.",
        features: &[
            "Everything in Creator",
            "Mentorship program",
            "12 studio hours per month",
            "Brand partnership desk",
            "Legal & rights desk",
        ],
        highlighted: false,
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Maya Okafor",
        role: "Founder & President",
        bio: "Documentary YouTuber who started the guild as a monthly meetup in her living room.",
        image: "/images/team/maya.webp",
        profile_url: Some("https://www.linkedin.com/"),
    },
    TeamMember {
        name: "Daniel Reyes",
        role: "Head of Programs",
        bio: "Runs the workshop and mentorship tracks after a decade producing podcasts.",
        image: "/images/team/daniel.webp",
        profile_url: None,
    },
    TeamMember {
        name: "Sofia Lindqvist",
        role: "Partnerships Lead",
        bio: "Connects members with brands and keeps our rate benchmarks honest.",
        image: "/images/team/sofia.webp",
        profile_url: Some("https://www.linkedin.com/"),
    },
    TeamMember {
        name: "Kenji Watanabe",
        role: "Studio Manager",
        bio: "Keeps the cameras charged, the booths quiet and the booking calendar fair.",
        image: "/images/team/kenji.webp",
        profile_url: None,
    },
];

pub const VALUES: &[(&str, &str)] = &[
    ("Creators first", "Every program is shaped by what members ask for."),
    ("Fair pay", "We push for transparent rates and honest contracts."),
    ("Open doors", "A free tier means nobody is priced out of the community."),
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The mentorship program took my channel from a hobby to my full-time job in a year.",
        author: "Priya N.",
        channel: "Cooking channel, 310k subscribers",
    },
    Testimonial {
        quote: "Studio access alone is worth the membership. My podcast finally sounds professional.",
        author: "Marcus T.",
        channel: "Weekly history podcast",
    },
    Testimonial {
        quote: "I found my co-host and my editor on the collab board. This community is the real deal.",
        author: "Lena K.",
        channel: "Gaming streamer",
    },
];

pub const EVENTS: &[Event] = &[
    Event {
        slug: "spring-creator-summit",
        title: "Spring Creator Summit",
        date: "2026-04-18",
        location: "Harbor Convention Center",
        category: "Conference",
        summary: "A day of talks and panels with creators across every platform.",
        details: "Twelve speakers, three stages and a portfolio review lounge. Members get early access to the recorded talks.",
    },
    Event {
        slug: "thumbnail-clinic",
        title: "Thumbnail Clinic",
        date: "2026-09-12",
        location: "Guild Studio, Room B",
        category: "Workshop",
        summary: "Bring your last five thumbnails and leave with a sharper click-through rate.",
        details: "Live critique in small groups with a designer who has worked on channels with millions of subscribers.",
    },
    Event {
        slug: "podcast-night",
        title: "Podcast Night",
        date: "2026-11-06",
        location: "The Listening Room",
        category: "Meetup",
        summary: "Live recordings from three member podcasts followed by an open mic.",
        details: "Doors open at 7pm. Sign up for the open mic at the door; slots are ten minutes each.",
    },
    Event {
        slug: "brand-deals-101",
        title: "Brand Deals 101",
        date: "2026-11-21",
        location: "Online",
        category: "Workshop",
        summary: "How to price, pitch and negotiate your first sponsorships.",
        details: "Our partnerships team walks through real (anonymized) contracts and answers questions live.",
    },
    Event {
        slug: "winter-showcase",
        title: "Winter Showcase",
        date: "2026-12-12",
        location: "Riverside Gallery",
        category: "Showcase",
        summary: "Screenings and exhibits of the best member work of the year.",
        details: "Submissions close November 30. Every accepted piece is featured on the gallery page.",
    },
];

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem { title: "Summit main stage", image: "/images/gallery/summit-stage.webp", category: "Events" },
    GalleryItem { title: "Podcast booth", image: "/images/gallery/podcast-booth.webp", category: "Studio" },
    GalleryItem { title: "Green screen stage", image: "/images/gallery/green-screen.webp", category: "Studio" },
    GalleryItem { title: "Thumbnail clinic", image: "/images/gallery/thumbnail-clinic.webp", category: "Workshops" },
    GalleryItem { title: "Winter showcase", image: "/images/gallery/showcase.webp", category: "Events" },
    GalleryItem { title: "Storytelling class", image: "/images/gallery/storytelling.webp", category: "Workshops" },
    GalleryItem { title: "Chapter meetup", image: "/images/gallery/meetup.webp", category: "Community" },
    GalleryItem { title: "Editing suite", image: "/images/gallery/editing-suite.webp", category: "Studio" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "YouTube", short: "YT", url: "https://www.youtube.com/" },
    SocialLink { name: "Instagram", short: "IG", url: "https://www.instagram.com/" },
    SocialLink { name: "TikTok", short: "TT", url: "https://www.tiktok.com/" },
    SocialLink { name: "X", short: "\u{1d54f}", url: "https://x.com/" },
];

pub const CONTACT: ContactDetails = ContactDetails {
    email: "hello@creatorsguild.org",
    phone: "+1 (555) 010-2030",
    address: "48 Mill Street, Suite 3, Riverside",
    map_embed_url: "https://www.google.com/maps/embed?pb=!1m14!1m12!1m3!1d3000!2d-73.98!3d40.75!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!5e0!3m2!1sen!2sus",
    membership_form_url: "https://forms.gle/creators-guild-membership",
};

pub fn find_event(slug: &str) -> Option<&'static Event> {
    EVENTS.iter().find(|event| event.slug == slug)
}

/// Events on or after `today`, soonest first.
pub fn upcoming_events(today: NaiveDate) -> Vec<&'static Event> {
    let mut events: Vec<_> = EVENTS
        .iter()
        .filter(|event| event.date().is_some_and(|date| date >= today))
        .collect();
    events.sort_by_key(|event| event.date());
    events
}

/// Events before `today`, most recent first.
pub fn past_events(today: NaiveDate) -> Vec<&'static Event> {
    let mut events: Vec<_> = EVENTS
        .iter()
        .filter(|event| event.date().is_some_and(|date| date < today))
        .collect();
    events.sort_by_key(|event| core::cmp::Reverse(event.date()));
    events
}

/// Distinct gallery categories in the order they first appear.
pub fn gallery_categories() -> Vec<&'static str> {
    let mut categories = Vec::new();
    for item in GALLERY {
        if !categories.contains(&item.category) {
            categories.push(item.category);
        }
    }
    categories
}

/// Gallery items in `category`, or everything when `category` is `None`.
pub fn gallery_items(category: Option<&str>) -> Vec<&'static GalleryItem> {
    GALLERY
        .iter()
        .filter(|item| category.is_none_or(|wanted| item.category == wanted))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_every_event_date_parses() {
        for event in EVENTS {
            assert!(event.date().is_some(), "{} has a bad date", event.slug);
        }
    }

    #[test]
    fn test_event_slugs_are_unique() {
        let slugs: HashSet<_> = EVENTS.iter().map(|e| e.slug).collect();
        assert_eq!(slugs.len(), EVENTS.len());
    }

    #[test]
    fn test_upcoming_and_past_partition_events() {
        let today = day(2026, 10, 19);
        let upcoming = upcoming_events(today);
        let past = past_events(today);
        assert_eq!(upcoming.len() + past.len(), EVENTS.len());
        assert_eq!(upcoming[0].slug, "podcast-night");
        assert_eq!(past[0].slug, "thumbnail-clinic");
    }

    #[test]
    fn test_event_on_today_is_upcoming() {
        let today = day(2026, 11, 6);
        assert!(upcoming_events(today).iter().any(|e| e.slug == "podcast-night"));
        assert!(past_events(today).iter().all(|e| e.slug != "podcast-night"));
    }

    #[test]
    fn test_find_event() {
        assert_eq!(find_event("winter-showcase").map(|e| e.title), Some("Winter Showcase"));
        assert!(find_event("nope").is_none());
    }

    #[test]
    fn test_gallery_categories_first_seen_order() {
        assert_eq!(gallery_categories(), vec!["Events", "Studio", "Workshops", "Community"]);
    }

    #[test]
    fn test_gallery_items_filter() {
        assert_eq!(gallery_items(None).len(), GALLERY.len());
        let studio = gallery_items(Some("Studio"));
        assert_eq!(studio.len(), 3);
        assert!(studio.iter().all(|item| item.category == "Studio"));
        assert!(gallery_items(Some("Nothing")).is_empty());
    }

    #[test]
    fn test_exactly_one_highlighted_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.highlighted).count(), 1);
    }
}
