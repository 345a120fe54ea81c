//! Static page content. Everything here is fixed at build time.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Bundled asset path, served by trunk.
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Database,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: SkillIcon,
}

/// "What I Do" entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatValue {
    Figure(&'static str),
    Stars(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: StatValue,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Github,
    Linkedin,
    Mail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: LinkKind,
    pub href: &'static str,
    pub external: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: LinkKind,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub about_title: &'static str,
    pub bio: &'static [&'static str],
    pub contact_pitch: &'static str,
    pub copyright_year: u16,
}

pub const PROFILE: Profile = Profile {
    name: "Fatimah Adam",
    initials: "FA",
    headline: "Software Engineer & Mobile App Developer",
    about_title: "Passionate Software Engineer",
    bio: &[
        "I'm a dedicated software engineer specializing in mobile app and website development. \
         I have experience working with leading tech companies including Really Great Tech, \
         Developers in Vogue, Ispace, and Namibra.",
        "I'm passionate about creating intuitive mobile experiences and robust web applications \
         that solve real-world problems. When I'm not coding, I enjoy exploring new technologies \
         and contributing to the developer community.",
    ],
    contact_pitch: "I'm always excited about new opportunities and challenging projects. \
                    Let's discuss how we can bring your mobile and web ideas to life.",
    copyright_year: 2025,
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-commerce Website",
        description: "An ecommerce website with MERN STACK",
        image: "assets/ecommerce.png",
        tech: &["React", "TypeScript", "Express", "PostgreSQL", "Tailwind CSS"],
        github: "https://github.com/zahrawm/woo--ecommerce-website",
        live: "https://woo-ecommerce-website-frontend.vercel.app/",
    },
    Project {
        title: "Gym Guide Fitness App",
        description: "A fitness app that guides users through workouts",
        image: "assets/fitness.png",
        tech: &["Flutter", "Dart", "Firebase", "Material Design"],
        github: "https://github.com/zahrawm/gym-guide-app",
        live: "https://github.com/zahrawm/gym-guide-app",
    },
    Project {
        title: "Bolt-Ride Sharing App",
        description: "Flutter-based mobile app for rides",
        image: "assets/ride.png",
        tech: &["Flutter", "Dart", "Firebase", "REST API"],
        github: "https://github.com/zahrawm/Bolt-app",
        live: "https://github.com/zahrawm/Bolt-app",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Flutter",
        icon: SkillIcon::Code,
    },
    Skill {
        name: "Dart",
        icon: SkillIcon::Code,
    },
    Skill {
        name: "JavaScript",
        icon: SkillIcon::Code,
    },
    Skill {
        name: "React",
        icon: SkillIcon::Code,
    },
    Skill {
        name: "Node.js",
        icon: SkillIcon::Database,
    },
    Skill {
        name: "Mobile Dev",
        icon: SkillIcon::Code,
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Mobile App Development",
        summary: "Creating cross-platform mobile apps with Flutter and native performance",
    },
    Service {
        title: "Web Development",
        summary: "Building responsive web applications with modern frameworks and technologies",
    },
    Service {
        title: "Full Stack Solutions",
        summary: "End-to-end development from frontend to backend with database integration",
    },
    Service {
        title: "Experience",
        summary: "Worked with Really Great Tech, Developers in Vogue, Ispace, and Namibra",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        value: StatValue::Figure("50+"),
        label: "Projects Completed",
    },
    Stat {
        value: StatValue::Figure("5+"),
        label: "Years Experience",
    },
    Stat {
        value: StatValue::Figure("30+"),
        label: "Happy Clients",
    },
    Stat {
        value: StatValue::Stars(5),
        label: "Client Rating",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: LinkKind::Github,
        href: "https://github.com/zahrawm",
        external: true,
    },
    SocialLink {
        kind: LinkKind::Linkedin,
        href: "https://linkedin.com/in/fatimah-adam",
        external: true,
    },
    SocialLink {
        kind: LinkKind::Mail,
        href: "mailto:adamfatima2557@gmail.com",
        external: false,
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        kind: LinkKind::Mail,
        text: "adamfatima2557@gmail.com",
    },
    ContactChannel {
        kind: LinkKind::Github,
        text: "github.com/zahrawm",
    },
    ContactChannel {
        kind: LinkKind::Mail,
        text: "0545515826 / 0201112557",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_titles_are_unique() {
        let mut titles: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), PROJECTS.len());
    }

    #[test]
    fn project_links_are_absolute() {
        for project in PROJECTS {
            assert!(project.github.starts_with("https://"), "{}", project.title);
            assert!(project.live.starts_with("https://"), "{}", project.title);
            assert!(!project.tech.is_empty(), "{}", project.title);
        }
    }

    #[test]
    fn about_and_contact_tables_hold_the_page_copy() {
        let skills: Vec<_> = SKILLS.iter().map(|s| s.name).collect();
        assert_eq!(
            skills,
            ["Flutter", "Dart", "JavaScript", "React", "Node.js", "Mobile Dev"]
        );
        assert_eq!(
            STATS.last(),
            Some(&Stat {
                value: StatValue::Stars(5),
                label: "Client Rating",
            })
        );
        assert_eq!(CONTACT_CHANNELS.len(), 3);
        assert_eq!(CONTACT_CHANNELS[1].kind, LinkKind::Github);
    }
}
