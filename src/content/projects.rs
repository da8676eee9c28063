//! Featured projects as cards.

use crate::render::{styled, Canvas, Theme};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Completed,
    Active,
    InDevelopment,
    Planning,
    Concept,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::Active => "Active",
            Status::InDevelopment => "In Development",
            Status::Planning => "Planning",
            Status::Concept => "Concept",
        }
    }

    fn style(self, theme: &Theme) -> Style {
        match self {
            Status::Completed => theme.item,
            Status::Active => theme.info,
            Status::InDevelopment => theme.warning,
            Status::Planning => theme.header,
            Status::Concept => theme.accent,
        }
    }
}

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub status: Status,
}

pub const FEATURED: &[Project] = &[
    Project {
        name: "Neff Paving Website",
        description: "Complete modern website rebuild with video hero section, responsive design, \
                      and performance optimization. Features include interactive galleries, contact \
                      forms, and SEO optimization.",
        tech_stack: &["Vite", "JavaScript", "GSAP", "CSS3", "HTML5"],
        highlights: &["Video optimization", "GSAP animations", "Mobile-first design"],
        status: Status::Completed,
    },
    Project {
        name: "CLI Music Downloader",
        description: "Professional command-line tool for downloading music with high-quality \
                      metadata enhancement. Includes MusicBrainz API integration, album art \
                      processing, and comprehensive error handling.",
        tech_stack: &["Python", "MusicBrainz API", "Mutagen", "Shell Scripting"],
        highlights: &[
            "Metadata enhancement",
            "Multi-source integration",
            "Professional documentation",
        ],
        status: Status::Completed,
    },
    Project {
        name: "Interactive Terminal Portfolio",
        description: "This very portfolio! A keyboard-driven terminal program showcasing \
                      professional experience through menus, colored output and typewriter effects.",
        tech_stack: &["Rust", "Terminal UI", "ASCII Art", "Color Formatting"],
        highlights: &[
            "Modular architecture",
            "Interactive navigation",
            "Professional presentation",
        ],
        status: Status::Active,
    },
    Project {
        name: "Enterprise Web Application",
        description: "Full-stack business application with user authentication, real-time updates, \
                      and comprehensive dashboard. Features role-based access control and advanced \
                      reporting.",
        tech_stack: &["React", "Node.js", "PostgreSQL", "Socket.io", "Docker"],
        highlights: &["Real-time features", "Role-based access", "Scalable architecture"],
        status: Status::InDevelopment,
    },
    Project {
        name: "API Management Platform",
        description: "Comprehensive platform for API documentation, testing, and monitoring. \
                      Includes automated testing suites, performance monitoring, and developer portal.",
        tech_stack: &["Vue.js", "Express.js", "MongoDB", "Redis", "AWS"],
        highlights: &["API testing", "Performance monitoring", "Developer tools"],
        status: Status::Planning,
    },
    Project {
        name: "E-commerce Solution",
        description: "Modern e-commerce platform with payment processing, inventory management, and \
                      customer analytics. Built with microservices architecture for scalability.",
        tech_stack: &["Next.js", "Stripe API", "GraphQL", "Docker", "Kubernetes"],
        highlights: &["Payment integration", "Microservices", "Analytics dashboard"],
        status: Status::Concept,
    },
];

pub fn render(canvas: &mut Canvas<'_>) -> anyhow::Result<()> {
    let theme = canvas.theme().clone();

    canvas.header("FEATURED PROJECTS PORTFOLIO")?;
    canvas.line(styled(
        format!(
            "Here are {} featured projects showcasing my technical expertise:",
            FEATURED.len()
        ),
        theme.emphasis,
    ))?;
    canvas.blank()?;

    for (index, project) in FEATURED.iter().enumerate() {
        card(canvas, &theme, index, project)?;
    }

    canvas.line(styled("💡 Project Insights:", theme.header))?;
    for insight in [
        "Each project demonstrates different aspects of full-stack development",
        "Technologies range from modern web frameworks to command-line tools",
        "Focus on user experience, performance, and maintainable code",
        "Emphasis on professional documentation and testing",
    ] {
        canvas.line(format!("• {}", insight))?;
    }

    canvas.blank()?;
    canvas.line(styled(
        "🚀 Want to discuss any of these projects? Use the contact section!",
        theme.warning,
    ))?;
    Ok(())
}

fn card(
    canvas: &mut Canvas<'_>,
    theme: &Theme,
    index: usize,
    project: &Project,
) -> anyhow::Result<()> {
    canvas.line(styled(
        format!("【 {}. {} 】", index + 1, project.name),
        theme.emphasis,
    ))?;
    canvas.line(Line::from(vec![
        Span::styled("└─ Status: ", theme.accent),
        Span::styled(project.status.label(), project.status.style(theme)),
    ]))?;

    canvas.blank()?;
    canvas.line(styled("Description:", theme.item))?;
    canvas.line(format!("  {}", project.description))?;

    canvas.blank()?;
    canvas.line(styled("Tech Stack:", theme.header))?;
    canvas.line(format!("  🔧 {}", project.tech_stack.join(" • ")))?;

    canvas.blank()?;
    canvas.line(styled("Key Highlights:", theme.warning))?;
    for highlight in project.highlights {
        canvas.line(format!("  ⭐ {}", highlight))?;
    }

    canvas.rule('─', theme.border)?;
    canvas.blank()?;
    Ok(())
}
