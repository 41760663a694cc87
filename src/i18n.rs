use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// Parses a stored language code. Anything but a supported code is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "fr" => Some(Language::Fr),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Fr => "🇫🇷",
            Language::En => "🇬🇧",
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::Fr => &FR,
            Language::En => &EN,
        }
    }
}

pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub about: AboutText,
    pub skills: SkillsText,
    pub services: ServicesText,
    pub github: GitHubText,
    pub projects: ProjectsText,
    pub certificates: CertificatesText,
    pub contact: ContactText,
    pub footer: FooterText,
}

pub struct NavText {
    pub home: &'static str,
    pub about: &'static str,
    pub skills: &'static str,
    pub projects: &'static str,
    pub services: &'static str,
    pub github: &'static str,
    pub contact: &'static str,
    pub email: &'static str,
    pub language: &'static str,
    pub send_email: &'static str,
    pub toggle_theme: &'static str,
}

pub struct HeroText {
    pub greeting: &'static str,
    pub title1: &'static str,
    pub title2: &'static str,
    pub subtitle: &'static str,
    pub location: &'static str,
    pub available: &'static str,
    pub view_projects: &'static str,
    pub contact_me: &'static str,
    pub scroll: &'static str,
    pub badge: &'static str,
}

pub struct Experience {
    pub year: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub subtitle: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub struct Education {
    pub year: &'static str,
    pub title: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

pub struct AboutStatsText {
    pub years: &'static str,
    pub internships: &'static str,
    pub projects: &'static str,
    pub technologies: &'static str,
}

pub struct AboutText {
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub bio_title: &'static str,
    pub bio: &'static str,
    pub subtitle: &'static str,
    pub experiences: &'static str,
    pub formation: &'static str,
    pub languages: &'static str,
    pub interests: &'static str,
    pub stats: AboutStatsText,
    pub experiences_list: &'static [Experience],
    pub education_list: &'static [Education],
}

pub struct SkillCategoriesText {
    pub frontend: &'static str,
    pub backend: &'static str,
    pub tools: &'static str,
    pub management: &'static str,
}

pub struct SkillsText {
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub categories: SkillCategoriesText,
}

pub struct ServicesText {
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub fullstack: &'static str,
    pub fullstack_desc: &'static str,
    pub websites: &'static str,
    pub websites_desc: &'static str,
    pub mobile: &'static str,
    pub mobile_desc: &'static str,
    pub ecommerce: &'static str,
    pub ecommerce_desc: &'static str,
    pub landing: &'static str,
    pub landing_desc: &'static str,
    pub design: &'static str,
    pub design_desc: &'static str,
    pub cta: &'static str,
}

pub struct GitHubStatsText {
    pub repos: &'static str,
    pub followers: &'static str,
    pub following: &'static str,
    pub stars: &'static str,
}

pub struct GitHubText {
    pub title_prefix: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub stats: GitHubStatsText,
    pub top_languages: &'static str,
    pub analysed: &'static str,
    pub popular_repos: &'static str,
    pub no_description: &'static str,
    pub view_all: &'static str,
    pub error: &'static str,
}

pub struct ProjectsText {
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub all: &'static str,
    pub frontend: &'static str,
    pub fullstack: &'static str,
    pub mobile: &'static str,
    pub backend: &'static str,
    pub in_progress: &'static str,
    pub no_projects: &'static str,
    pub view_demo: &'static str,
    pub view_code: &'static str,
}

pub struct CertificatesText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub obtained_on: &'static str,
    pub view_certificate: &'static str,
}

pub struct ContactFormText {
    pub name: &'static str,
    pub name_placeholder: &'static str,
    pub email: &'static str,
    pub email_placeholder: &'static str,
    pub subject: &'static str,
    pub subject_placeholder: &'static str,
    pub message: &'static str,
    pub message_placeholder: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

pub struct ContactInfoText {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub struct ContactText {
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub info: &'static str,
    pub social: &'static str,
    pub form: ContactFormText,
    pub contact_info: ContactInfoText,
}

pub struct FooterText {
    pub description: &'static str,
    pub quick_links: &'static str,
    pub contact_title: &'static str,
    pub rights: &'static str,
    pub made_with: &'static str,
    pub and: &'static str,
    pub back_to_top: &'static str,
}

static FR: Translations = Translations {
    nav: NavText {
        home: "Accueil",
        about: "À propos",
        skills: "Compétences",
        projects: "Projets",
        services: "Services",
        github: "GitHub",
        contact: "Contact",
        email: "Email",
        language: "Langue",
        send_email: "Envoyer un email",
        toggle_theme: "Changer de thème",
    },
    hero: HeroText {
        greeting: "👋 Bonjour, je suis Hamza",
        title1: "Développeur",
        title2: "Full-Stack",
        subtitle: "& Étudiant en génie logiciel",
        location: "Basé à Casablanca, Maroc",
        available: "DISPONIBLE",
        view_projects: "Voir mes projets",
        contact_me: "Me contacter",
        scroll: "Scroll",
        badge: "Full-Stack Developer",
    },
    about: AboutText {
        title: "Expérience &",
        title_highlight: "Formation",
        bio_title: "Qui suis-je ?",
        bio: "Je suis Ezzouek Hamza, développeur full-stack avec des bases en développement mobile, actuellement étudiant en 4e année du cycle d'ingénieur en sciences des données et développement informatique. En début de carrière, je m'intéresse à la conception de solutions web complètes et évolutives, et je suis à la recherche d'une opportunité de stage ou d'emploi afin de renforcer mes compétences et évoluer dans un environnement professionnel stimulant.",
        subtitle: "Mon parcours professionnel et académique, illustrant mon évolution dans le domaine du développement informatique.",
        experiences: "Expériences professionnelles",
        formation: "Formation",
        languages: "Langues",
        interests: "Centres d'intérêt",
        stats: AboutStatsText {
            years: "Années d'études",
            internships: "Stages",
            projects: "Projets réalisés",
            technologies: "Technologies",
        },
        experiences_list: &[
            Experience {
                year: "Avril 2025 – Juillet 2025",
                title: "Stage de fin d'études",
                company: "MuntadaCom - Compagnie Marocaine",
                subtitle: "Spécialisée en Digitalisation des Processus",
                location: "Casablanca",
                description: "Développement d'une application web de gestion RH avec React.js pour le frontend, Node.js et Express.js pour le backend, et MySQL pour la base de données.",
                technologies: &["React.js", "Node.js", "Express.js", "MySQL"],
            },
            Experience {
                year: "Décembre 2024 - Mars 2025",
                title: "Stage",
                company: "Laboratoire d'études transversales",
                subtitle: "en droit, Économie et Management des affaires",
                location: "Casablanca",
                description: "Conception et développement d'une application web destinée à présenter les services et activités d'un laboratoire. Réalisée avec React.js et Laravel.",
                technologies: &["React.js", "Laravel", "PHP"],
            },
            Experience {
                year: "Février 2024 – Mai 2024",
                title: "Stage de fin d'études",
                company: "All Formations",
                subtitle: "",
                location: "France",
                description: "Développement d'une application web fullstack pour l'adoption d'animaux avec ReactJS et Laravel. Gestion de projet avec Git.",
                technologies: &["ReactJS", "TailwindCSS", "Laravel", "MySQL", "Git"],
            },
        ],
        education_list: &[
            Education {
                year: "2024-2025",
                title: "Licence professionnelle Génie Logiciel",
                institution: "ESTEM",
                location: "Casablanca",
                description: "Formation spécialisée en génie logiciel couvrant les méthodologies de développement, architectures logicielles et technologies avancées.",
            },
            Education {
                year: "2022-2024",
                title: "Technicien en développement informatique",
                institution: "OFPPT centre de formation professionnelle",
                location: "Casablanca",
                description: "Formation complète en développement informatique couvrant les technologies web, bases de données et méthodologies de développement.",
            },
            Education {
                year: "2020-2021",
                title: "Baccalauréat en science physique",
                institution: "Groupe scolaire Ouhoud",
                location: "Casablanca",
                description: "Formation scientifique de base en sciences physiques.",
            },
        ],
    },
    skills: SkillsText {
        title: "Technologies &",
        title_highlight: "Outils",
        subtitle: "Stack technique que je maîtrise pour créer des solutions complètes",
        categories: SkillCategoriesText {
            frontend: "Frontend",
            backend: "Backend",
            tools: "Outils",
            management: "Gestion de projet",
        },
    },
    services: ServicesText {
        title: "Mes",
        title_highlight: "Services",
        subtitle: "Solutions professionnelles que je peux vous offrir pour concrétiser vos projets",
        fullstack: "Sites Full-Stack",
        fullstack_desc: "Développement complet d'applications web avec React.js, Node.js, et bases de données. Solutions évolutives et performantes de A à Z.",
        websites: "Sites Web Présentatifs",
        websites_desc: "Création de sites vitrines modernes et élégants pour présenter votre entreprise, vos services ou votre portfolio de manière professionnelle.",
        mobile: "Applications Mobile",
        mobile_desc: "Développement d'applications mobiles natives et cross-platform avec React Native et Flutter pour iOS et Android.",
        ecommerce: "Sites E-commerce",
        ecommerce_desc: "Conception de boutiques en ligne complètes avec gestion des produits, paiements sécurisés et interface utilisateur intuitive.",
        landing: "Landing Pages",
        landing_desc: "Création de pages d'atterrissage optimisées pour la conversion, avec design attractif et appels à l'action efficaces.",
        design: "Design & UI/UX",
        design_desc: "Conception d'interfaces utilisateur modernes et intuitives, avec une attention particulière à l'expérience utilisateur et l'esthétique.",
        cta: "Discutons de votre projet",
    },
    github: GitHubText {
        title_prefix: "Activité",
        title_highlight: "GitHub",
        subtitle: "Mes contributions et projets open-source",
        stats: GitHubStatsText {
            repos: "Dépôts",
            followers: "Abonnés",
            following: "Abonnements",
            stars: "Étoiles",
        },
        top_languages: "Langages les plus utilisés",
        analysed: "Analyse dynamique des dépôts :",
        popular_repos: "Dépôts Populaires",
        no_description: "Pas de description",
        view_all: "Voir tous mes projets sur GitHub",
        error: "Impossible de charger les statistiques GitHub pour le moment.",
    },
    projects: ProjectsText {
        title: "Mes",
        title_highlight: "Projets",
        subtitle: "Découvrez mes projets académiques et personnels",
        all: "Tous",
        frontend: "Frontend",
        fullstack: "Full-Stack",
        mobile: "Mobile",
        backend: "Backend",
        in_progress: "En cours",
        no_projects: "Aucun projet dans cette catégorie",
        view_demo: "Voir démo",
        view_code: "Voir code",
    },
    certificates: CertificatesText {
        title: "Certifications",
        subtitle: "Validation de mes compétences à travers des formations reconnues.",
        obtained_on: "Obtenu sur",
        view_certificate: "Voir le certificat",
    },
    contact: ContactText {
        title: "Me",
        title_highlight: "Contacter",
        subtitle: "N'hésitez pas à me contacter pour toute opportunité ou collaboration",
        info: "Informations de contact",
        social: "Réseaux sociaux",
        form: ContactFormText {
            name: "Nom complet",
            name_placeholder: "Votre nom",
            email: "Email",
            email_placeholder: "votre@email.com",
            subject: "Sujet",
            subject_placeholder: "Sujet du message",
            message: "Message",
            message_placeholder: "Votre message...",
            send: "Envoyer le message",
            sending: "Envoi en cours...",
            success: "Message envoyé avec succès ! Je vous répondrai bientôt.",
            error: "Une erreur est survenue. Veuillez réessayer ou me contacter directement par email.",
        },
        contact_info: ContactInfoText {
            email: "Email",
            phone: "Téléphone",
            location: "Localisation",
        },
    },
    footer: FooterText {
        description: "Développeur Full-Stack passionné par la création de solutions web modernes et performantes.",
        quick_links: "Liens rapides",
        contact_title: "Contact",
        rights: "Tous droits réservés.",
        made_with: "Fait avec",
        and: "et Rust",
        back_to_top: "Retour en haut",
    },
};

static EN: Translations = Translations {
    nav: NavText {
        home: "Home",
        about: "About",
        skills: "Skills",
        projects: "Projects",
        services: "Services",
        github: "GitHub",
        contact: "Contact",
        email: "Email",
        language: "Language",
        send_email: "Send Email",
        toggle_theme: "Toggle theme",
    },
    hero: HeroText {
        greeting: "👋 Hello, I'm Hamza",
        title1: "Full-Stack",
        title2: "Developer",
        subtitle: "& Software Engineering Student",
        location: "Based in Casablanca, Morocco",
        available: "AVAILABLE",
        view_projects: "View my projects",
        contact_me: "Contact me",
        scroll: "Scroll",
        badge: "Full-Stack Developer",
    },
    about: AboutText {
        title: "Experience &",
        title_highlight: "Education",
        bio_title: "Who am I?",
        bio: "I am Ezzouek Hamza, a full-stack developer with a background in mobile development, currently a 4th-year engineering student in data science and computer development. At the start of my career, I am interested in designing complete and scalable web solutions, and I am looking for an internship or job opportunity to strengthen my skills and grow in a stimulating professional environment.",
        subtitle: "My professional and academic journey, illustrating my evolution in the field of software development.",
        experiences: "Professional Experience",
        formation: "Education",
        languages: "Languages",
        interests: "Interests",
        stats: AboutStatsText {
            years: "Years of study",
            internships: "Internships",
            projects: "Completed projects",
            technologies: "Technologies",
        },
        experiences_list: &[
            Experience {
                year: "April 2025 – July 2025",
                title: "End of Studies Internship",
                company: "MuntadaCom - Moroccan Company",
                subtitle: "Specialized in Process Digitalization",
                location: "Casablanca",
                description: "Development of an HR web application with React.js for the frontend, Node.js and Express.js for the backend, and MySQL for the database.",
                technologies: &["React.js", "Node.js", "Express.js", "MySQL"],
            },
            Experience {
                year: "December 2024 - March 2025",
                title: "Internship",
                company: "Laboratory of Transversal Studies",
                subtitle: "in Law, Economics and Business Management",
                location: "Casablanca",
                description: "Design and development of a web application to present the services and activities of a laboratory. Built with React.js and Laravel.",
                technologies: &["React.js", "Laravel", "PHP"],
            },
            Experience {
                year: "February 2024 – May 2024",
                title: "End of Studies Internship",
                company: "All Formations",
                subtitle: "",
                location: "France",
                description: "Development of a fullstack web application for animal adoption with ReactJS and Laravel. Project management with Git.",
                technologies: &["ReactJS", "TailwindCSS", "Laravel", "MySQL", "Git"],
            },
        ],
        education_list: &[
            Education {
                year: "2024-2025",
                title: "Professional License in Software Engineering",
                institution: "ESTEM",
                location: "Casablanca",
                description: "Specialized training in software engineering covering development methodologies, software architectures, and advanced technologies.",
            },
            Education {
                year: "2022-2024",
                title: "IT Development Technician",
                institution: "OFPPT Professional Training Center",
                location: "Casablanca",
                description: "Complete training in IT development covering web technologies, databases, and development methodologies.",
            },
            Education {
                year: "2020-2021",
                title: "High School Diploma in Physical Sciences",
                institution: "Groupe Scolaire Ouhoud",
                location: "Casablanca",
                description: "Basic scientific training in physical sciences.",
            },
        ],
    },
    skills: SkillsText {
        title: "Technologies &",
        title_highlight: "Tools",
        subtitle: "Technical stack I master to create complete solutions",
        categories: SkillCategoriesText {
            frontend: "Frontend",
            backend: "Backend",
            tools: "Tools",
            management: "Project Management",
        },
    },
    services: ServicesText {
        title: "My",
        title_highlight: "Services",
        subtitle: "Professional solutions I can offer to bring your projects to life",
        fullstack: "Full-Stack Websites",
        fullstack_desc: "End-to-end web application development with React.js, Node.js and databases. Scalable, high-performance solutions from A to Z.",
        websites: "Showcase Websites",
        websites_desc: "Modern, elegant showcase sites that present your business, your services or your portfolio professionally.",
        mobile: "Mobile Apps",
        mobile_desc: "Native and cross-platform mobile apps built with React Native and Flutter for iOS and Android.",
        ecommerce: "E-commerce Websites",
        ecommerce_desc: "Complete online stores with product management, secure payments and an intuitive user interface.",
        landing: "Landing Pages",
        landing_desc: "Conversion-focused landing pages with attractive design and effective calls to action.",
        design: "Design & UI/UX",
        design_desc: "Modern, intuitive user interfaces with close attention to user experience and aesthetics.",
        cta: "Let's talk about your project",
    },
    github: GitHubText {
        title_prefix: "GitHub",
        title_highlight: "Activity",
        subtitle: "My contributions and open-source projects",
        stats: GitHubStatsText {
            repos: "Repositories",
            followers: "Followers",
            following: "Following",
            stars: "Total Stars",
        },
        top_languages: "Most Used Languages",
        analysed: "Dynamic analysis of repositories:",
        popular_repos: "Popular Repositories",
        no_description: "No description",
        view_all: "View all my projects on GitHub",
        error: "GitHub statistics could not be loaded right now.",
    },
    projects: ProjectsText {
        title: "My",
        title_highlight: "Projects",
        subtitle: "Discover my academic and personal projects",
        all: "All",
        frontend: "Frontend",
        fullstack: "Full-Stack",
        mobile: "Mobile",
        backend: "Backend",
        in_progress: "In Progress",
        no_projects: "No projects in this category",
        view_demo: "View demo",
        view_code: "View code",
    },
    certificates: CertificatesText {
        title: "Certifications",
        subtitle: "My skills, validated through recognized training programs.",
        obtained_on: "Earned on",
        view_certificate: "View certificate",
    },
    contact: ContactText {
        title: "",
        title_highlight: "Contact Me",
        subtitle: "Feel free to contact me for any opportunity or collaboration",
        info: "Contact Information",
        social: "Social Networks",
        form: ContactFormText {
            name: "Full Name",
            name_placeholder: "Your name",
            email: "Email",
            email_placeholder: "your@email.com",
            subject: "Subject",
            subject_placeholder: "Message subject",
            message: "Message",
            message_placeholder: "Your message...",
            send: "Send message",
            sending: "Sending...",
            success: "Message sent successfully! I will reply soon.",
            error: "An error occurred. Please try again or contact me directly by email.",
        },
        contact_info: ContactInfoText {
            email: "Email",
            phone: "Phone",
            location: "Location",
        },
    },
    footer: FooterText {
        description: "Full-Stack Developer passionate about creating modern and high-performance web solutions.",
        quick_links: "Quick Links",
        contact_title: "Contact",
        rights: "All rights reserved.",
        made_with: "Made with",
        and: "and Rust",
        back_to_top: "Back to top",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code(" en "), None);
        assert_eq!(Language::default(), Language::Fr);
    }

    #[test]
    fn test_languages_select_distinct_dictionaries() {
        let fr = Language::Fr.translations();
        let en = Language::En.translations();
        assert_eq!(fr.nav.home, "Accueil");
        assert_eq!(en.nav.home, "Home");
        assert_eq!(fr.projects.no_projects, "Aucun projet dans cette catégorie");
        assert_eq!(en.projects.no_projects, "No projects in this category");
        assert_ne!(fr.contact.form.success, en.contact.form.success);
    }

    #[test]
    fn test_timelines_match_across_languages() {
        let fr = &Language::Fr.translations().about;
        let en = &Language::En.translations().about;
        assert_eq!(fr.experiences_list.len(), en.experiences_list.len());
        assert_eq!(fr.education_list.len(), en.education_list.len());
        for (f, e) in fr.experiences_list.iter().zip(en.experiences_list) {
            assert_eq!(f.technologies, e.technologies);
            assert_eq!(f.location, e.location);
        }
    }
}
