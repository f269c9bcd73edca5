// Static portfolio content. Nothing here is fetched.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub photo: &'static str,
    pub resume: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
    pub roles: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub period: &'static str,
    /// Markdown bullet list.
    pub details: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub file: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
    /// Markdown.
    pub body: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Gokul Nanda HV",
    tagline: "• Java • Automation • Android",
    about: "I am a results-driven Full Stack & QA Automation Engineer experienced in Java, \
            Spring Boot, Selenium, Android and Python. I build scalable systems, robust \
            automation suites, and production-quality mobile apps, with focus on reliability, \
            testability and performance.",
    photo: "/photo.jpg",
    resume: "/resume.pdf",
    linkedin: "https://www.linkedin.com/in/gokul-nanda-hv-677b8137a/",
    email: "ggokulnandahv@gmail.com",
    roles: &[
        "Java Developer",
        "QA Automation Engineer",
        "Android Developer",
        "Full Stack Developer",
    ],
};

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Software Testing Intern, Robowaves",
        period: "May 2025 – Present",
        details: "- Built Selenium + Java automation suites and CI integrations.\n\
                  - Implemented Page Object Model and reusable helpers to speed tests.\n\
                  - Improved regression stability and reduced manual testing time.",
    },
    Experience {
        title: "AI Intern, Samsung Lab",
        period: "Jun 2025",
        details: "- Implemented preprocessing pipelines for healthcare models.\n\
                  - Optimized Python ETL scripts for performance and reliability.\n\
                  - Assisted in creating reproducible PoC ML demos.",
    },
];

pub const SKILLS: &[&str] = &[
    "Java",
    "Spring Boot",
    "Selenium",
    "React",
    "Android",
    "Python",
    "MySQL",
    "Docker",
    "Jenkins",
];

pub const TECH_TIMELINE: &[&str] = &[
    "Java",
    "Spring Boot",
    "Selenium",
    "React",
    "Android",
    "MySQL",
    "Docker",
    "Jenkins",
];

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Robowaves Internship",
        subtitle: "Automation & Selenium",
        file: "/certs/robowaves.pdf",
    },
    Certificate {
        title: "Samsung AI Internship",
        subtitle: "Healthcare AI",
        file: "/certs/samsung.pdf",
    },
    Certificate {
        title: "Java Full Stack Course",
        subtitle: "Course Completion",
        file: "/certs/java.pdf",
    },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "reliable-automation-frameworks",
        title: "Designing Reliable Automation Frameworks",
        date: "2025-05-20",
        excerpt: "Best practices, POM, CI integration and flaky test reduction...",
        body: "Reliable suites start with **structure**.\n\n\
               - Keep locators inside page objects, never in tests.\n\
               - Wait on conditions, not on `sleep`.\n\
               - Run the suite in CI on every merge and quarantine flaky tests quickly.\n",
    },
    BlogPost {
        slug: "scaling-spring-boot",
        title: "Scaling Spring Boot Services",
        date: "2024-11-12",
        excerpt: "Tips to design scalable microservices and reduce latency...",
        body: "Latency budgets are spent in I/O.\n\n\
               - Pool connections and size the pool from measurements.\n\
               - Cache read-heavy lookups close to the caller.\n\
               - Profile before splitting a service.\n",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_blog_slugs_are_unique() {
        let slugs: HashSet<_> = BLOG_POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), BLOG_POSTS.len());
    }

    #[test]
    fn test_profile_has_roles() {
        assert!(!PROFILE.roles.is_empty());
    }
}
