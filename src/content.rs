//! Authored portfolio content: who, what they know, what they built.

use serde::{Deserialize, Serialize};

pub struct PersonalInfo {
    pub name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub cv_link: &'static str,
}

pub struct SocialLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub twitter: &'static str,
    pub instagram: &'static str,
}

pub static PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Ezzouek Hamza",
    initials: "EH.",
    title: "DÉVELOPPEUR FULL-STACK / ÉTUDIANT EN GÉNIE LOGICIEL",
    description: "Je suis Ezzouek Hamza, stagiaire en développement full-stack, à la recherche d'une opportunité de stage pour enrichir mon expérience. Passionné par la création de solutions web complètes, je souhaite contribuer et perfectionner mes compétences dans un environnement professionnel stimulant.",
    email: "ezouekhamza2411@gmail.com",
    phone: "+212 640 347045",
    location: "Casablanca, Maroc",
    image: "/images/profile.svg",
    cv_link: "#",
};

pub const FAVICON: &str = "/favicon.svg";

pub static SOCIAL_LINKS: SocialLinks = SocialLinks {
    github: "https://github.com/ezzouekhamza",
    linkedin: "https://linkedin.com/in/ezzouekhamza",
    twitter: "https://twitter.com/ezzouekhamza",
    instagram: "https://instagram.com/ezzouekhamza",
};

/// Page sections, in render order. The id doubles as the DOM anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Services,
    Certificates,
    GitHub,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Services,
        Section::Certificates,
        Section::GitHub,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Services => "services",
            Section::Certificates => "certificates",
            Section::GitHub => "github",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    Frontend,
    Backend,
    Tools,
    Management,
}

pub struct Skill {
    pub name: &'static str,
    /// Icon font class (devicon, or the site's `extra-*` set).
    pub icon: &'static str,
}

pub struct SkillCategory {
    pub kind: SkillKind,
    pub accent: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        kind: SkillKind::Frontend,
        accent: "#61DAFB",
        skills: &[
            Skill { name: "HTML", icon: "devicon-html5-plain" },
            Skill { name: "CSS", icon: "devicon-css3-plain" },
            Skill { name: "JavaScript", icon: "devicon-javascript-plain" },
            Skill { name: "Bootstrap", icon: "devicon-bootstrap-plain" },
            Skill { name: "TailwindCSS", icon: "devicon-tailwindcss-original" },
            Skill { name: "ReactJS", icon: "devicon-react-original" },
        ],
    },
    SkillCategory {
        kind: SkillKind::Backend,
        accent: "#6DB33F",
        skills: &[
            Skill { name: "PHP", icon: "devicon-php-plain" },
            Skill { name: "Laravel", icon: "devicon-laravel-original" },
            Skill { name: "MySQL", icon: "devicon-mysql-plain" },
            Skill { name: "MongoDB", icon: "devicon-mongodb-plain" },
            Skill { name: "NodeJS", icon: "devicon-nodejs-plain" },
            Skill { name: "Express", icon: "devicon-express-original" },
            Skill { name: "Java", icon: "devicon-java-plain" },
            Skill { name: "XML", icon: "devicon-xml-plain" },
        ],
    },
    SkillCategory {
        kind: SkillKind::Tools,
        accent: "#F2C811",
        skills: &[
            Skill { name: "UML", icon: "extra-diagram" },
            Skill { name: "GanttProject", icon: "extra-tasks" },
            Skill { name: "Figma", icon: "devicon-figma-plain" },
            Skill { name: "Canva", icon: "devicon-canva-original" },
        ],
    },
    SkillCategory {
        kind: SkillKind::Management,
        accent: "#FF2D20",
        skills: &[
            Skill { name: "Agile", icon: "extra-agile" },
            Skill { name: "Scrum", icon: "extra-users" },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    Frontend,
    Fullstack,
    Mobile,
    Backend,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Frontend,
        ProjectCategory::Fullstack,
        ProjectCategory::Mobile,
        ProjectCategory::Backend,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "frontend",
            ProjectCategory::Fullstack => "fullstack",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Backend => "backend",
        }
    }
}

/// Filter value that shows every project.
pub const ALL_PROJECTS: &str = "all";

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub demo: Option<&'static str>,
    pub category: ProjectCategory,
    pub in_progress: bool,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Dentiste Site Web",
        description: "Site web pour un cabinet dentaire moderne.",
        image: "https://images.unsplash.com/photo-1588776814546-1ffcf47267a5?w=500&h=300&fit=crop",
        technologies: &["JavaScript", "HTML", "CSS"],
        github: "https://github.com/HAMZAZAWAK17/dentiste",
        demo: None,
        category: ProjectCategory::Frontend,
        in_progress: false,
    },
    Project {
        id: 2,
        title: "Flutter Full Project",
        description: "Application mobile complète développée avec Flutter.",
        image: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=500&h=300&fit=crop",
        technologies: &["Dart", "Flutter"],
        github: "https://github.com/HAMZAZAWAK17/Flutter_fullproject",
        demo: None,
        category: ProjectCategory::Mobile,
        in_progress: false,
    },
    Project {
        id: 3,
        title: "Weather Map App",
        description: "Application de carte météo interactive.",
        image: "https://images.unsplash.com/photo-1592210454359-9043f067919b?w=500&h=300&fit=crop",
        technologies: &["Dart", "Flutter"],
        github: "https://github.com/HAMZAZAWAK17/WethearMap",
        demo: None,
        category: ProjectCategory::Mobile,
        in_progress: false,
    },
    Project {
        id: 4,
        title: "News App",
        description: "Application d'actualités en temps réel.",
        image: "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=500&h=300&fit=crop",
        technologies: &["Dart", "Flutter"],
        github: "https://github.com/HAMZAZAWAK17/News-app",
        demo: None,
        category: ProjectCategory::Mobile,
        in_progress: false,
    },
    Project {
        id: 5,
        title: "Formateur Management",
        description: "Système de gestion pour formateurs.",
        image: "https://images.unsplash.com/photo-1531403009284-440f080d1e12?w=500&h=300&fit=crop",
        technologies: &["JavaScript"],
        github: "https://github.com/HAMZAZAWAK17/FormateurManagement-hamza-soufiane",
        demo: None,
        category: ProjectCategory::Fullstack,
        in_progress: false,
    },
    Project {
        id: 6,
        title: "Tracksol",
        description: "Solution de suivi de projet.",
        image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=500&h=300&fit=crop",
        technologies: &["TypeScript"],
        github: "https://github.com/HAMZAZAWAK17/Tracksol",
        demo: None,
        category: ProjectCategory::Fullstack,
        in_progress: true,
    },
    Project {
        id: 7,
        title: "Email Sender API",
        description: "API backend pour l'envoi d'emails avec Node.js.",
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=500&h=300&fit=crop",
        technologies: &["JavaScript", "Node.js", "Express"],
        github: "https://github.com/HAMZAZAWAK17/Email-Sender",
        demo: None,
        category: ProjectCategory::Backend,
        in_progress: false,
    },
    Project {
        id: 8,
        title: "Rate Limiter",
        description: "Middleware de limitation de débit pour Express API.",
        image: "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?w=500&h=300&fit=crop",
        technologies: &["JavaScript", "Node.js"],
        github: "https://github.com/HAMZAZAWAK17/rate_limiter",
        demo: None,
        category: ProjectCategory::Backend,
        in_progress: false,
    },
    Project {
        id: 9,
        title: "App Sqlite TP",
        description: "Application mobile Android utilisant SQLite.",
        image: "https://images.unsplash.com/photo-1526498460520-4c246339dccb?w=500&h=300&fit=crop",
        technologies: &["Java", "Android"],
        github: "https://github.com/HAMZAZAWAK17/AppSqlliteTp",
        demo: None,
        category: ProjectCategory::Mobile,
        in_progress: false,
    },
];

/// Projects visible under `filter`: everything for `"all"`, otherwise the
/// exact category match. Unknown filters match nothing.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &str) -> Vec<&'a Project> {
    if filter == ALL_PROJECTS {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|p| p.category.slug() == filter)
        .collect()
}

pub struct Certification {
    pub id: u32,
    pub title: &'static str,
    pub platform: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: 1,
        title: "Python Training",
        platform: "Orange Digital Center",
        date: "04 - 05 Février 2026",
        description: "Certification de participation active au programme de formation Python organisé par Orange Digital Center Club Ben M'Sik.",
        image: "/images/certificate-python.svg",
        link: "/docs/python-certificate.pdf",
    },
    Certification {
        id: 2,
        title: "Front-end Developer",
        platform: "Udemy",
        date: "2024",
        description: "Formation complète sur les technologies Front-end modernes incluant React, TailwindCSS et l'optimisation de performance.",
        image: "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?w=800&h=500&fit=crop",
        link: "#",
    },
];

pub struct SpokenLanguage {
    pub name: &'static str,
    pub level: &'static str,
    pub percentage: u8,
}

pub static SPOKEN_LANGUAGES: &[SpokenLanguage] = &[
    SpokenLanguage { name: "Arabe", level: "Langue maternelle", percentage: 100 },
    SpokenLanguage { name: "Anglais", level: "Intermédiaire avancé", percentage: 75 },
    SpokenLanguage { name: "Français", level: "Intermédiaire avancé", percentage: 75 },
];

pub struct Interest {
    pub name: &'static str,
    pub icon: &'static str,
}

pub static INTERESTS: &[Interest] = &[
    Interest { name: "Kickboxing", icon: "🥊" },
    Interest { name: "Football", icon: "⚽" },
    Interest { name: "Voyage", icon: "🧭" },
];

/// Headline numbers shown in the About section.
pub struct AboutStats {
    pub years_of_study: u32,
    pub internships: u32,
    pub projects: usize,
    pub technologies: usize,
}

pub fn about_stats() -> AboutStats {
    AboutStats {
        years_of_study: 5,
        internships: 3,
        projects: PROJECTS.len(),
        technologies: SKILLS.iter().map(|c| c.skills.len()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_all_returns_everything() {
        let visible = filter_projects(PROJECTS, ALL_PROJECTS);
        assert_eq!(visible.len(), PROJECTS.len());
    }

    #[test]
    fn test_filter_by_category() {
        let visible = filter_projects(PROJECTS, "mobile");
        let expected = PROJECTS
            .iter()
            .filter(|p| p.category == ProjectCategory::Mobile)
            .count();
        assert_eq!(visible.len(), expected);
        assert!(visible
            .iter()
            .all(|p| p.category == ProjectCategory::Mobile));
        let ids = visible.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 3, 4, 9]);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        assert!(filter_projects(PROJECTS, "desktop").is_empty());
        assert!(filter_projects(PROJECTS, "Mobile").is_empty());
        assert!(filter_projects(&[], ALL_PROJECTS).is_empty());
    }

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids = Section::ALL.iter().map(|s| s.id()).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
        assert_eq!(Section::GitHub.href(), "#github");
    }

    #[test]
    fn test_about_stats_follow_content() {
        let stats = about_stats();
        assert_eq!(stats.projects, 9);
        assert_eq!(stats.technologies, 20);
    }

    #[test]
    fn test_local_assets_exist() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let local = [FAVICON, PERSONAL_INFO.image]
            .into_iter()
            .chain(CERTIFICATIONS.iter().flat_map(|c| [c.image, c.link]))
            .chain(PROJECTS.iter().map(|p| p.image))
            .filter(|path| path.starts_with('/'));
        for path in local {
            let file = public.join(path.trim_start_matches('/'));
            assert!(file.is_file(), "missing asset {}", file.display());
        }
    }
}
