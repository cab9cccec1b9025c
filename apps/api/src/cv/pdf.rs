//! CV PDF rendering. Single A4 page, builtin Helvetica fonts, sections in
//! fixed order. Content past the bottom margin is clamped rather than flowed
//! onto a second page.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;
use printpdf::*;
use uuid::Uuid;

use crate::cv::models::CvData;

/// Renders the CV into `{uploads_dir}/cv_{uuid}.pdf` and returns the file name.
pub fn generate_cv_pdf(cv: &CvData, uploads_dir: &Path) -> Result<String> {
    std::fs::create_dir_all(uploads_dir)?;

    let file_name = format!("cv_{}.pdf", Uuid::new_v4());
    let file_path = uploads_dir.join(&file_name);

    let (doc, page1, layer1) = PdfDocument::new(
        "CV",
        Mm(210.0), // A4 width
        Mm(297.0), // A4 height
        "Layer 1",
    );
    let current_layer = doc.get_page(page1).get_layer(layer1);

    let font_bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let left_margin = Mm(20.0);
    let bottom_margin = Mm(20.0);
    let mut current_y = Mm(277.0);

    // Name header
    current_layer.use_text(&cv.personal_info.full_name, 22.0, left_margin, current_y, &font_bold);

    // Contact lines
    current_y -= Mm(8.0);
    let contact = join_present(&[
        &cv.personal_info.email,
        &cv.personal_info.phone,
        &cv.personal_info.location,
    ]);
    if !contact.is_empty() {
        current_layer.use_text(&contact, 10.0, left_margin, current_y, &font_regular);
        current_y -= Mm(6.0);
    }
    let links = join_present(&[&cv.personal_info.linkedin, &cv.personal_info.portfolio]);
    if !links.is_empty() {
        current_layer.use_text(&links, 10.0, left_margin, current_y, &font_regular);
        current_y -= Mm(6.0);
    }

    // Professional summary
    if !cv.summary.trim().is_empty() {
        current_y -= Mm(6.0);
        current_layer.use_text("PROFESSIONAL SUMMARY", 13.0, left_margin, current_y, &font_bold);
        current_y -= Mm(7.0);
        for line in wrap_text(&cv.summary, 95) {
            current_layer.use_text(&line, 10.0, left_margin, current_y, &font_regular);
            current_y -= Mm(5.0);
            if current_y < bottom_margin {
                break;
            }
        }
    }

    // Skills
    if !cv.skills.is_empty() && current_y > bottom_margin {
        current_y -= Mm(6.0);
        current_layer.use_text("SKILLS", 13.0, left_margin, current_y, &font_bold);
        current_y -= Mm(7.0);
        for line in wrap_text(&cv.skills.join(" • "), 95) {
            current_layer.use_text(&line, 10.0, left_margin, current_y, &font_regular);
            current_y -= Mm(5.0);
            if current_y < bottom_margin {
                break;
            }
        }
    }

    // Work experience
    let experience: Vec<_> = cv.experience.iter().filter(|e| !e.title.is_empty()).collect();
    if !experience.is_empty() && current_y > bottom_margin {
        current_y -= Mm(6.0);
        current_layer.use_text("WORK EXPERIENCE", 13.0, left_margin, current_y, &font_bold);
        current_y -= Mm(7.0);
        for entry in experience {
            if current_y < bottom_margin {
                break;
            }
            current_layer.use_text(
                &format!("{} | {}", entry.title, entry.company),
                11.0,
                left_margin,
                current_y,
                &font_bold,
            );
            current_y -= Mm(5.0);
            let end_date = if entry.end_date.is_empty() { "Present" } else { &entry.end_date };
            current_layer.use_text(
                &format!("{} | {} - {}", entry.location, entry.start_date, end_date),
                9.0,
                left_margin,
                current_y,
                &font_regular,
            );
            current_y -= Mm(5.0);
            for line in wrap_text(&entry.description, 95) {
                if current_y < bottom_margin {
                    break;
                }
                current_layer.use_text(&line, 10.0, left_margin, current_y, &font_regular);
                current_y -= Mm(5.0);
            }
            current_y -= Mm(3.0);
        }
    }

    // Education
    let education: Vec<_> = cv.education.iter().filter(|e| !e.degree.is_empty()).collect();
    if !education.is_empty() && current_y > bottom_margin {
        current_y -= Mm(6.0);
        current_layer.use_text("EDUCATION", 13.0, left_margin, current_y, &font_bold);
        current_y -= Mm(7.0);
        for entry in education {
            if current_y < bottom_margin {
                break;
            }
            current_layer.use_text(
                &format!("{} | {}", entry.degree, entry.institution),
                11.0,
                left_margin,
                current_y,
                &font_bold,
            );
            current_y -= Mm(5.0);
            let year_line = if entry.grade.is_empty() {
                entry.year.clone()
            } else {
                format!("{} | {}", entry.year, entry.grade)
            };
            current_layer.use_text(&year_line, 9.0, left_margin, current_y, &font_regular);
            current_y -= Mm(7.0);
        }
    }

    // Projects
    let projects: Vec<_> = cv.projects.iter().filter(|p| !p.name.is_empty()).collect();
    if !projects.is_empty() && current_y > bottom_margin {
        current_y -= Mm(6.0);
        current_layer.use_text("PROJECTS", 13.0, left_margin, current_y, &font_bold);
        current_y -= Mm(7.0);
        for project in projects {
            if current_y < bottom_margin {
                break;
            }
            current_layer.use_text(&project.name, 11.0, left_margin, current_y, &font_bold);
            current_y -= Mm(5.0);
            if !project.technologies.is_empty() {
                current_layer.use_text(
                    &format!("Technologies: {}", project.technologies),
                    9.0,
                    left_margin,
                    current_y,
                    &font_regular,
                );
                current_y -= Mm(5.0);
            }
            for line in wrap_text(&project.description, 95) {
                if current_y < bottom_margin {
                    break;
                }
                current_layer.use_text(&line, 10.0, left_margin, current_y, &font_regular);
                current_y -= Mm(5.0);
            }
            current_y -= Mm(3.0);
        }
    }

    // Certifications
    if !cv.certifications.is_empty() && current_y > bottom_margin {
        current_y -= Mm(6.0);
        current_layer.use_text("CERTIFICATIONS", 13.0, left_margin, current_y, &font_bold);
        current_y -= Mm(7.0);
        for cert in &cv.certifications {
            if current_y < bottom_margin {
                break;
            }
            current_layer.use_text(&format!("• {cert}"), 10.0, left_margin, current_y, &font_regular);
            current_y -= Mm(5.0);
        }
    }

    doc.save(&mut BufWriter::new(File::create(&file_path)?))?;

    Ok(file_name)
}

fn join_present(parts: &[&String]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Greedy word wrap to a character budget per line.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if !current_line.is_empty() && current_line.len() + word.len() + 1 > max_chars {
            lines.push(std::mem::take(&mut current_line));
        }
        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::models::{EducationEntry, ExperienceEntry, PersonalInfo};

    fn sample_cv() -> CvData {
        CvData {
            personal_info: PersonalInfo {
                full_name: "Asha Rao".to_string(),
                email: "asha@example.com".to_string(),
                phone: "+91 98765 43210".to_string(),
                location: "Bangalore".to_string(),
                linkedin: "linkedin.com/in/asharao".to_string(),
                portfolio: String::new(),
            },
            summary: "Backend engineer focused on reliable data platforms.".to_string(),
            experience: vec![ExperienceEntry {
                title: "Software Engineer".to_string(),
                company: "Infosys".to_string(),
                location: "Bangalore".to_string(),
                start_date: "2021".to_string(),
                end_date: String::new(),
                description: "Built and operated ingestion pipelines handling millions of daily events."
                    .to_string(),
            }],
            education: vec![EducationEntry {
                degree: "B.Tech Computer Science".to_string(),
                institution: "NIT Trichy".to_string(),
                year: "2021".to_string(),
                grade: "8.9 CGPA".to_string(),
            }],
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            certifications: vec!["AWS Certified Cloud Practitioner".to_string()],
            projects: vec![],
        }
    }

    #[test]
    fn test_generates_pdf_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let file_name = generate_cv_pdf(&sample_cv(), dir.path()).unwrap();
        assert!(file_name.starts_with("cv_"));
        assert!(file_name.ends_with(".pdf"));

        let bytes = std::fs::read(dir.path().join(&file_name)).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output must be a PDF");
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_file_names_are_unique_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let first = generate_cv_pdf(&sample_cv(), dir.path()).unwrap();
        let second = generate_cv_pdf(&sample_cv(), dir.path()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_wrap_text_respects_budget() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap_text(text, 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 12, "line {line:?} exceeds budget");
        }
    }

    #[test]
    fn test_wrap_text_keeps_overlong_word_whole() {
        let lines = wrap_text("supercalifragilisticexpialidocious", 10);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_empty_sections_still_render() {
        let dir = tempfile::tempdir().unwrap();
        let cv = CvData {
            personal_info: PersonalInfo {
                full_name: "Bare Minimum".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let file_name = generate_cv_pdf(&cv, dir.path()).unwrap();
        assert!(dir.path().join(file_name).exists());
    }
}
