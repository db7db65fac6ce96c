//! Static portfolio content
//!
//! All section data is hand-authored here so updating the portfolio is a
//! matter of editing these tables, not touching any rendering code.

use ratatui::style::Color;

/// Owner profile shown on the home section
pub struct Profile {
    pub name: &'static str,
    pub logo_short: &'static str,
    pub greeting: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub location: &'static str,
    pub resume_note: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Kartik Bansal",
    logo_short: "Kartik.",
    greeting: "Welcome to my portfolio",
    role: "Computer Science Student & Software Developer",
    summary: "Passionate about building innovative solutions using AI, web \
              technologies, and clean code. Currently pursuing B.Tech at \
              G.L.A. University.",
    location: "Mathura, Uttar Pradesh, India",
    resume_note: "Resume available on request via the contact form",
};

/// Bio paragraphs for the about section
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate Computer Science student with a love for building \
     software that makes a difference. Currently in my pre-final year at \
     G.L.A. University, I spend my time exploring new technologies and \
     creating projects that solve real-world problems.",
    "My interests span from AI and Machine Learning to full-stack web \
     development. I believe in writing clean, maintainable code and \
     constantly learning new skills.",
];

/// Education card data
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub cpi: &'static str,
    pub graduation: &'static str,
    pub coursework: &'static [&'static str],
}

pub const EDUCATION: Education = Education {
    degree: "B.Tech in Computer Science & Engineering",
    institution: "G.L.A. University, Mathura",
    cpi: "7.71 / 10",
    graduation: "June 2027",
    coursework: &["Data Structures & Algorithms", "Operating Systems", "DBMS"],
};

/// A single skill chip with its accent color
pub struct Skill {
    pub name: &'static str,
    pub color: Color,
}

/// Skills grouped by category
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        skills: &[
            Skill { name: "Java", color: Color::Red },
            Skill { name: "Python", color: Color::Yellow },
            Skill { name: "JavaScript", color: Color::LightYellow },
        ],
    },
    SkillCategory {
        title: "Frameworks & Tools",
        skills: &[
            Skill { name: "React.js", color: Color::Cyan },
            Skill { name: "Flask", color: Color::Gray },
            Skill { name: "OpenCV", color: Color::Green },
            Skill { name: "Mediapipe", color: Color::Blue },
            Skill { name: "Git", color: Color::LightRed },
        ],
    },
    SkillCategory {
        title: "Databases",
        skills: &[
            Skill { name: "MySQL", color: Color::Blue },
            Skill { name: "PostgreSQL", color: Color::LightBlue },
            Skill { name: "MongoDB", color: Color::LightGreen },
        ],
    },
];

pub const SPOKEN_LANGUAGES: &[&str] = &["English", "Hindi"];

/// Project card data
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub repo: &'static str,
    pub live: Option<&'static str>,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "AI Proctoring System",
        description: "Real-time exam monitoring system with face detection, \
                      eye tracking, and multiple person detection. \
                      Automatically flags suspicious behavior using AI.",
        tech: &["Python", "OpenCV", "Mediapipe", "Flask", "Machine Learning"],
        repo: "https://github.com/kbansal1111",
        live: None,
        featured: true,
    },
    Project {
        title: "Linked List Visualizer",
        description: "Interactive web tool for visualizing linked list \
                      operations with dynamic DOM updates. Perfect \
                      educational tool for beginners learning data \
                      structures.",
        tech: &["React.js", "JavaScript", "HTML/CSS"],
        repo: "https://github.com/kbansal1111",
        live: Some("https://linkedlist-visualizer.netlify.app/"),
        featured: true,
    },
];

pub const GITHUB_PROFILE: &str = "https://github.com/kbansal1111";

/// Work experience entry
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
    pub current: bool,
}

pub const EXPERIENCES: &[Experience] = &[Experience {
    role: "Full Stack Python Developer Intern",
    company: "Bigfat AI",
    location: "Noida, India (Remote)",
    period: "Dec 2025 - Present",
    highlights: &[
        "Developing full-stack applications as part of the in-house IT team",
        "Working with Python and modern web technologies",
        "Collaborating on AI-powered projects and solutions",
    ],
    current: true,
}];

/// Contact info row (label/value, optionally copyable)
pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { label: "Email", value: "kartikbansal9152@gmail.com" },
    ContactInfo { label: "Phone", value: "+91 8273889824" },
    ContactInfo { label: "Location", value: "Mathura, Uttar Pradesh, India" },
];

pub const CONTACT_EMAIL: &str = "kartikbansal9152@gmail.com";

/// Social link shown on home and contact sections
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", url: "https://github.com/kbansal1111" },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/kartik-bansal-85a34a289/",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/kartik_bansal_8273/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_skill_category_is_nonempty() {
        for category in SKILL_CATEGORIES {
            assert!(
                !category.skills.is_empty(),
                "category {} has no skills",
                category.title
            );
        }
    }

    #[test]
    fn test_projects_have_repo_links() {
        for project in PROJECTS {
            assert!(project.repo.starts_with("https://"));
        }
    }

    #[test]
    fn test_contact_email_matches_info_row() {
        let email_row = CONTACT_INFO.iter().find(|i| i.label == "Email").unwrap();
        assert_eq!(email_row.value, CONTACT_EMAIL);
    }

    #[test]
    fn test_social_links_are_absolute() {
        for link in SOCIAL_LINKS {
            assert!(link.url.starts_with("https://"));
        }
    }
}
