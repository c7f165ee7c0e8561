//! Fixed page content. Everything the page shows is defined here at load
//! time and never mutated.

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const STUDIO_NAME: &str = "MONOLITH";

pub const PROJECTS: &[Project] = &[
    Project {
        id: "01",
        title: "THE VOID HOUSE",
        location: "Tokyo, Japan",
        year: "2024",
        image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800&q=80",
    },
    Project {
        id: "02",
        title: "SILENT TOWER",
        location: "Berlin, Germany",
        year: "2023",
        image: "https://images.unsplash.com/photo-1486325212027-8081e485255e?w=800&q=80",
    },
    Project {
        id: "03",
        title: "RAW CONCRETE MUSEUM",
        location: "Mexico City",
        year: "2023",
        image: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800&q=80",
    },
    Project {
        id: "04",
        title: "BRUTALIST RESIDENCE",
        location: "London, UK",
        year: "2022",
        image: "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=800&q=80",
    },
    Project {
        id: "05",
        title: "THE OBSERVATORY",
        location: "Reykjavik, Iceland",
        year: "2022",
        image: "https://images.unsplash.com/photo-1600585154526-990dced4db0d?w=800&q=80",
    },
];

pub mod hero {
    pub const LABEL: &str = "Architecture Studio";
    pub const HEADLINE: &[&str] = &["FORM", "FOLLOWS", "FICTION"];
    pub const LEAD: &str =
        "Radical structures for the post-digital era. We design spaces that challenge perception.";
    pub const IMAGE: &str =
        "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800&q=80";
    pub const IMAGE_ALT: &str = "Brutalist Architecture";
    pub const REFERENCE: &str = "REF: 2024-001";
    pub const COORDINATES: &str = "48.8566° N, 2.3522° E";
}

pub mod manifesto {
    use super::Stat;

    pub const LABEL: &str = "About";
    pub const TITLE: &[&str] = &["OUR", "MANI", "FESTO"];
    pub const LEAD: &str = "We reject the ornament. We embrace the raw. In an age of digital excess, we return to the fundamental truth of materials—concrete, steel, glass—expressed with unwavering honesty.";
    pub const BODY: &[&str] = &[
        "Our practice is rooted in the belief that architecture must confront its context, not coddle it. Every structure we conceive is a dialogue between mass and void, permanence and ephemerality. We do not build for the present; we build for the geological time scale.",
        "Sustainability is not an add-on. It is embedded in our DNA—through the selection of local materials, the optimization of passive climate control, and the design of spaces that endure beyond trends. A building that lasts two centuries is inherently sustainable.",
    ];
    pub const STATS: &[Stat] = &[
        Stat { value: "47", label: "Projects" },
        Stat { value: "12", label: "Awards" },
        Stat { value: "08", label: "Countries" },
        Stat { value: "18", label: "Years" },
    ];
}

pub mod contact {
    use super::SocialLink;

    pub const EMAIL: &str = "hello@monolith.studio";
    pub const OFFICE: &[&str] = &["47 Brutalist Avenue", "London EC1A 1BB", "United Kingdom"];
    pub const COORDINATES: &[&str] = &["51.5074° N", "0.1278° W", "GMT+0"];
    // Placeholders, no live destinations yet.
    pub const SOCIAL: &[SocialLink] = &[
        SocialLink { label: "Instagram", href: "#" },
        SocialLink { label: "LinkedIn", href: "#" },
        SocialLink { label: "Twitter", href: "#" },
    ];
    pub const LEGAL: &[&str] = &["© 2024 Monolith Studio.", "All rights reserved."];
    pub const REGISTRATION: &str = "ARBN 847291056";

    pub fn mailto() -> String {
        format!("mailto:{}", EMAIL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique_and_ordered() {
        let ids: Vec<&str> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["01", "02", "03", "04", "05"]);
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), PROJECTS.len());
    }

    #[test]
    fn images_are_remote_urls() {
        assert!(PROJECTS.iter().all(|p| p.image.starts_with("https://")));
        assert!(hero::IMAGE.starts_with("https://"));
    }

    #[test]
    fn contact_link_is_mailto() {
        assert_eq!(contact::mailto(), "mailto:hello@monolith.studio");
    }

    #[test]
    fn four_statistics() {
        let labels: Vec<&str> = manifesto::STATS.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Projects", "Awards", "Countries", "Years"]);
    }
}
