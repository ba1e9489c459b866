use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// Header navigation, in display order.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        name: "About",
        href: "/about",
    },
    NavItem {
        name: "Work",
        href: "/work",
    },
    NavItem {
        name: "Writing",
        href: "/writing",
    },
    NavItem {
        name: "Links",
        href: "/links",
    },
];

/// Footer social profiles.
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/john-davis-williams/",
    },
    SocialLink {
        name: "GitHub",
        url: "https://github.com/thejohndwilliams",
    },
    SocialLink {
        name: "Instagram",
        url: "https://www.instagram.com/thejohndwilliams/",
    },
];
