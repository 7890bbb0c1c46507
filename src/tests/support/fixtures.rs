use crate::modules::portfolio::domain::entities::{
    ContactInfo, EducationEntry, PersonalInfo, PortfolioData, Project, TechStack,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_project(id: u32, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        description: format!("{} in one line", name),
        details: format!("{} explained at length", name),
        technologies: strings(&["Rust", "Actix", "PostgreSQL"]),
        live_link: format!("https://example.com/{}", id),
        github_link: format!("https://github.com/example/project-{}", id),
        image: format!("https://images.example.com/{}.png", id),
        featured: true,
    }
}

/// Two projects (WeChat, Weathere) and one education entry.
pub fn sample_portfolio() -> PortfolioData {
    let mut weathere = sample_project(2, "Weathere");
    weathere.technologies = strings(&["React", "OpenWeather API"]);
    weathere.featured = false;

    PortfolioData {
        personal: PersonalInfo {
            name: "Test Developer".to_string(),
            title: "Software Engineer".to_string(),
            location: "Remote".to_string(),
            bio: "Builds things for the web.".to_string(),
            profile_image: "https://images.example.com/me.jpg".to_string(),
            hero_background: "https://images.example.com/hero.jpg".to_string(),
        },
        projects: vec![sample_project(1, "WeChat"), weathere],
        education: vec![EducationEntry {
            id: 1,
            degree: "BSc Computer Science".to_string(),
            institution: "Example University".to_string(),
            graduation_year: "2026".to_string(),
            status: "Currently Pursuing".to_string(),
        }],
        tech_stack: TechStack {
            languages: strings(&["Rust", "TypeScript"]),
            frameworks: strings(&["Actix", "React"]),
            tools: strings(&["Git", "Docker"]),
            databases: strings(&["PostgreSQL"]),
        },
        contact: ContactInfo {
            email: "dev@example.com".to_string(),
            linkedin: "https://www.linkedin.com/in/example".to_string(),
            github: "https://github.com/example".to_string(),
        },
    }
}

/// Base URL of a port nobody listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
