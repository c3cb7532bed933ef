//! Built-in homepage content

use chrono::NaiveDate;

use super::models::{
    Audience, CampusAddress, Event, FooterLink, NewsItem, QuickLink, ResearchItem, Slide, Stat,
};
use super::{HeroContent, SiteContent};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn builtin() -> SiteContent {
    SiteContent {
        anchors: owned(&["News", "Research", "Events", "Campus"]),
        hero: HeroContent {
            badge: "Since 1946".to_string(),
            headline: owned(&["Shaping the Future", "of Knowledge"]),
            subheading: "Seoul National University, where excellence meets innovation. \
                Join Asia's leading institution in advancing human knowledge and shaping global leaders."
                .to_string(),
            actions: owned(&["Explore Programs", "Virtual Tour"]),
        },
        stats: stats(),
        library_holdings: Stat {
            value: 5_477_022,
            suffix: String::new(),
            label: "Library Holdings".to_string(),
            sublabel: String::new(),
        },
        news: news(),
        research: research(),
        events: events(),
        audiences: audiences(),
        quick_links: quick_links(),
        slides: slides(),
        campuses: campuses(),
        footer_links: links(&["Maps & Directions", "Contact Us", "A-Z Site Index", "Sitemap"]),
        legal_links: links(&["Office of Global Affairs", "Privacy Policy"]),
        social: owned(&["Facebook", "YouTube", "Instagram", "X", "LinkedIn"]),
    }
}

fn stat(value: u64, label: &str, sublabel: &str) -> Stat {
    Stat {
        value,
        suffix: String::new(),
        label: label.to_string(),
        sublabel: sublabel.to_string(),
    }
}

fn stats() -> Vec<Stat> {
    vec![
        stat(16, "Colleges", "11 Professional Graduate Schools"),
        stat(27, "Colleges & Schools", "Undergraduate & Graduate"),
        stat(6_397, "Faculty Members", "World-class Educators"),
        stat(31_544, "Students", "From 100+ Countries"),
    ]
}

fn news() -> Vec<NewsItem> {
    let item = |id, category: &str, title: &str, date, is_video, featured| NewsItem {
        id,
        category: category.to_string(),
        title: title.to_string(),
        date,
        is_video,
        featured,
    };
    vec![
        item(1, "SNU Catch", "Why Are Respected Adults Disappearing from Our Society?", date(2026, 1, 15), true, true),
        item(2, "Research", "Seoul National University Secures Its First Horizon Europe Project", date(2026, 1, 12), false, true),
        item(3, "Arts", "From Gayageum to AI: The Evolution of Contemporary Korean Music", date(2026, 1, 10), false, false),
        item(4, "Environment", "Bees Living on the Campus Rooftop?", date(2026, 1, 8), false, false),
        item(5, "SNU Catch", "Why Has Seoul Become a City for Survival Rather Than Living?", date(2026, 1, 5), true, false),
    ]
}

fn research() -> Vec<ResearchItem> {
    let item = |id, category: &str, title: &str, description: &str| ResearchItem {
        id,
        category: category.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    };
    vec![
        item(1, "Bioinformatics", "Multiple protein structure alignment at scale with FoldMason",
            "Revolutionary algorithm enables rapid comparison of thousands of protein structures."),
        item(2, "Climate Science", "AI-Powered Climate Change Prediction Models",
            "Machine learning models predict climate patterns with unprecedented accuracy."),
        item(3, "Quantum Physics", "Quantum Computing Breakthroughs in Materials Science",
            "New quantum algorithms accelerate materials discovery by 1000x."),
        item(4, "Medical Science", "Revolutionary Cancer Treatment Using Nanotechnology",
            "Targeted nanoparticles deliver drugs directly to cancer cells."),
    ]
}

fn events() -> Vec<Event> {
    let item = |id, title: &str, start_date, end_date, location: &str, kind: &str| Event {
        id,
        title: title.to_string(),
        start_date,
        end_date,
        location: location.to_string(),
        kind: kind.to_string(),
    };
    vec![
        item(1, "[SNU Health Service Center] New Year's Resolution for 2026, Three Weight Clinic Experts Are Here for You",
            date(2026, 1, 5), date(2026, 12, 31), "Health Service Center", "Health"),
        item(2, "2026 SNU Library OA APC Support",
            date(2026, 2, 19), date(2026, 10, 31), "University Library", "Academic"),
        item(3, "Invitation: Opening of the Seoul National University Heritage Library & Lounge",
            date(2026, 2, 9), date(2026, 4, 30), "Heritage Library", "Ceremony"),
        item(4, "Call for Paper Submissions for the 26th ICER International Conference",
            date(2026, 1, 20), date(2026, 3, 31), "Online Submission", "Conference"),
    ]
}

fn audiences() -> Vec<Audience> {
    [
        ("incoming", "Incoming Student"),
        ("current", "Current Student"),
        ("faculty", "Faculty"),
        ("researcher", "Researcher"),
        ("alumni", "Alumni"),
    ]
    .iter()
    .map(|(id, label)| Audience {
        id: id.to_string(),
        label: label.to_string(),
    })
    .collect()
}

fn quick_links() -> Vec<QuickLink> {
    [
        "Admissions Information",
        "Korean Language Program",
        "Exchange Program",
        "Visiting Program",
        "Int'l Summer Program",
        "On-campus Housing",
        "Admissions FAQ",
        "Admissions FAQ (中文)",
    ]
    .iter()
    .map(|label| QuickLink {
        label: label.to_string(),
        href: "#".to_string(),
    })
    .collect()
}

fn slides() -> Vec<Slide> {
    let slide = |id: u32, title: &str, description: &str, location: &str| Slide {
        id,
        image: format!("/campus-{}.jpg", id),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
    };
    vec![
        slide(1, "Seoul National University Museum Of Art",
            "A cultural hub showcasing contemporary and traditional Korean art", "Gwanak Campus"),
        slide(2, "Gwanak Campus Main Gate",
            "The iconic entrance welcoming students and visitors from around the world", "Gwanak Campus"),
        slide(3, "Yeongeon Medical Campus",
            "State-of-the-art facilities for medical education and research", "Yeongeon Campus"),
        slide(4, "Pyeongchang Campus",
            "A serene mountain campus dedicated to sports science and research", "Pyeongchang Campus"),
    ]
}

fn campuses() -> Vec<CampusAddress> {
    let campus = |name: &str, address: &str, phone: Option<&str>, fax: Option<&str>| CampusAddress {
        name: name.to_string(),
        address: address.to_string(),
        phone: phone.map(str::to_string),
        fax: fax.map(str::to_string),
    };
    vec![
        campus("Gwanak Main Campus", "1 Gwanak-ro, Gwanak-gu, Seoul 08826",
            Some("82-2-880-5114"), Some("82-2-887-8658")),
        campus("Yeongeon Medical Campus", "103 Daehak-ro, Jongno-gu, Seoul 03080", None, None),
        campus("Pyeongchang Campus",
            "1447 Pyeongchang-daero, Daehwa-myeon, Pyeongchang-gun, Gangwon-do 25354", None, None),
        campus("Siheung Campus", "Seouldaehak-ro 173, Siheung-si, Gyeonggi-do 15011", None, None),
    ]
}

fn links(names: &[&str]) -> Vec<FooterLink> {
    names
        .iter()
        .map(|name| FooterLink {
            name: name.to_string(),
            href: "#".to_string(),
        })
        .collect()
}
