//! Static profile data shown across sections.

pub const NAME: &str = "Jordan Lang";
pub const TAGLINE: &str = "Full-Stack Developer | Problem Solver | Tech Enthusiast";
pub const ROLE: &str = "Full-Stack Developer";
pub const LOCATION: &str = "Based in Ohio | Open to Remote Opportunities";

pub const EMAIL: &str = "jordan@jlang.dev";
pub const GITHUB: &str = "github.com/jordolang";
pub const LINKEDIN: &str = "linkedin.com/in/jordolang";
pub const TWITTER: &str = "@jordolang";

/// (icon + method, address, purpose)
pub const CONTACT_METHODS: &[(&str, &str, &str)] = &[
    ("📧 Email", EMAIL, "Primary contact method"),
    ("💼 LinkedIn", LINKEDIN, "Professional networking"),
    ("🐙 GitHub", GITHUB, "Code repositories and projects"),
    ("🐦 Twitter", TWITTER, "Tech discussions and updates"),
];

pub const CORE_SKILLS: &[(&str, &[&str])] = &[
    (
        "Frontend",
        &["React", "Vue.js", "HTML5/CSS3", "JavaScript/TypeScript", "Responsive Design"],
    ),
    (
        "Backend",
        &["Node.js", "Python", "ASP.NET Core", "RESTful APIs", "GraphQL"],
    ),
    (
        "Databases",
        &["PostgreSQL", "MySQL", "MongoDB", "SQL Server", "Redis"],
    ),
    ("DevOps", &["Docker", "GitHub Actions", "Vercel", "AWS", "Linux"]),
    ("Tools", &["Git", "VS Code", "Vite", "Webpack", "Postman"]),
];

pub const EMERGING_SKILLS: &[&str] = &[
    "Machine Learning",
    "Kubernetes",
    "Microservices",
    "WebAssembly",
    "Blockchain",
];

pub const QUICK_STATS: &[(&str, &str)] = &[
    ("Years of Experience", "5+"),
    ("Projects Completed", "25+"),
    ("Technologies Mastered", "15+"),
    ("Lines of Code Written", "50,000+"),
    ("Coffee Consumed", "∞"),
];

/// (period, role, achievements), most recent first
pub const TIMELINE: &[(&str, &str, &[&str])] = &[
    (
        "2024 - Present",
        "Senior Full-Stack Developer",
        &[
            "Leading development of enterprise web applications",
            "Mentoring junior developers and code reviews",
            "Architecting scalable microservices solutions",
        ],
    ),
    (
        "2022 - 2024",
        "Full-Stack Developer",
        &[
            "Built responsive web applications using React and Node.js",
            "Developed RESTful APIs and database optimization",
            "Implemented CI/CD pipelines and automated testing",
        ],
    ),
    (
        "2020 - 2022",
        "Frontend Developer",
        &[
            "Created modern, accessible user interfaces",
            "Collaborated with UX/UI designers on user experience",
            "Optimized application performance and SEO",
        ],
    ),
];

pub const OPPORTUNITIES: &[&str] = &[
    "Full-time positions in full-stack development",
    "Freelance projects and consulting opportunities",
    "Collaboration on open-source projects",
    "Technical mentorship and knowledge sharing",
    "Speaking engagements at tech events",
];
