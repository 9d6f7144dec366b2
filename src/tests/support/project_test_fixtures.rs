use crate::modules::project::application::domain::Project;

pub fn project(id: u32, slug: &str, featured: bool) -> Project {
    Project {
        id,
        slug: slug.to_string(),
        title: format!("Project {slug}"),
        description: format!("Description of {slug}"),
        full_description: None,
        project_aim: None,
        image: Some(format!("/projects/{slug}.png")),
        tags: vec![],
        links: vec![],
        featured,
        screenshots: vec![],
        technical_contributions: vec![],
        challenges: vec![],
        solutions: vec![],
        technologies: vec![],
        testimonials: vec![],
        timeline: vec![],
        date: None,
        duration: None,
    }
}
