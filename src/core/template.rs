//! Flat `{{NAME}}` placeholder substitution.

use crate::utils::error::{Result, SiteError};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    HomeTitle,
    HomeIntro,
    BooksContent,
    NowReadingContent,
    RecentlyReadContent,
    ReadGridContent,
    ProjectsContent,
    ResumeExperience,
    ResumeEducation,
    ResumeSkills,
    BlogContent,
    ContactIntro,
    ContactLinks,
}

impl Placeholder {
    pub const ALL: [Placeholder; 13] = [
        Placeholder::HomeTitle,
        Placeholder::HomeIntro,
        Placeholder::BooksContent,
        Placeholder::NowReadingContent,
        Placeholder::RecentlyReadContent,
        Placeholder::ReadGridContent,
        Placeholder::ProjectsContent,
        Placeholder::ResumeExperience,
        Placeholder::ResumeEducation,
        Placeholder::ResumeSkills,
        Placeholder::BlogContent,
        Placeholder::ContactIntro,
        Placeholder::ContactLinks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::HomeTitle => "HOME_TITLE",
            Placeholder::HomeIntro => "HOME_INTRO",
            Placeholder::BooksContent => "BOOKS_CONTENT",
            Placeholder::NowReadingContent => "NOW_READING_CONTENT",
            Placeholder::RecentlyReadContent => "RECENTLY_READ_CONTENT",
            Placeholder::ReadGridContent => "READ_GRID_CONTENT",
            Placeholder::ProjectsContent => "PROJECTS_CONTENT",
            Placeholder::ResumeExperience => "RESUME_EXPERIENCE",
            Placeholder::ResumeEducation => "RESUME_EDUCATION",
            Placeholder::ResumeSkills => "RESUME_SKILLS",
            Placeholder::BlogContent => "BLOG_CONTENT",
            Placeholder::ContactIntro => "CONTACT_INTRO",
            Placeholder::ContactLinks => "CONTACT_LINKS",
        }
    }

    /// The literal marker as it appears in the template, e.g. `{{HOME_TITLE}}`.
    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.token())
    }
}

pub type Bindings = BTreeMap<Placeholder, String>;

/// Replaces every bound placeholder in `template` with its fragment.
///
/// Each bound placeholder must occur exactly once; a missing or repeated
/// token is an error and nothing is produced. The template is scanned once,
/// so a fragment that happens to contain a token is inserted as-is. Tokens
/// with no binding are left alone.
pub fn bind(template: &str, bindings: &Bindings) -> Result<String> {
    let mut splices: Vec<(usize, usize, &str)> = Vec::with_capacity(bindings.len());
    for (placeholder, fragment) in bindings {
        let token = placeholder.token();
        let positions: Vec<usize> = template.match_indices(&token).map(|(i, _)| i).collect();
        match positions.as_slice() {
            [] => {
                return Err(SiteError::MissingPlaceholder {
                    placeholder: token,
                })
            }
            [start] => splices.push((*start, token.len(), fragment.as_str())),
            _ => {
                return Err(SiteError::DuplicatePlaceholder {
                    placeholder: token,
                    count: positions.len(),
                })
            }
        }
    }
    splices.sort_unstable_by_key(|(start, _, _)| *start);

    let extra: usize = splices.iter().map(|(_, _, fragment)| fragment.len()).sum();
    let mut output = String::with_capacity(template.len() + extra);
    let mut cursor = 0;
    for (start, len, fragment) in splices {
        output.push_str(&template[cursor..start]);
        output.push_str(fragment);
        cursor = start + len;
    }
    output.push_str(&template[cursor..]);
    Ok(output)
}

/// Placeholders of any known name that are still present in `html`.
pub fn unresolved(html: &str) -> Vec<Placeholder> {
    Placeholder::ALL
        .into_iter()
        .filter(|p| html.contains(&p.token()))
        .collect()
}
