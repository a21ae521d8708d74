/// LicenseClassifier policy for naming a license from its text
///
/// Encodes the rules used to map the body of a LICENSE/COPYING file onto an
/// SPDX identifier. Text is lower-cased and reduced to words before matching.
///
/// Licenses with a title line (GPL family, MPL, Apache...) are recognized by
/// that title, and only near the top of the file: the full texts of these
/// licenses name each other further down (MPL-2.0 lists the GNU licenses as
/// secondary licenses, GPL-3.0 refers to the AGPL and the LGPL). When several
/// titles appear in the opening, the earliest one wins. Untitled licenses
/// (BSD, MIT, ISC...) are matched on their distinctive wording anywhere, in
/// order, so BSD-3-Clause is checked before BSD-2-Clause.
pub struct LicenseClassifier;

/// How far into the normalized text a title may start
const TITLE_WINDOW: usize = 1000;

/// (SPDX id, title phrases, any of which names the license)
const TITLES: &[(&str, &[&str])] = &[
    ("MPL-2.0", &["mozilla public license version 2.0"]),
    ("AGPL-3.0", &["gnu affero general public license version 3"]),
    ("LGPL-3.0", &["gnu lesser general public license version 3"]),
    ("LGPL-2.1", &["gnu lesser general public license version 2.1"]),
    ("GPL-3.0", &["gnu general public license version 3"]),
    ("GPL-2.0", &["gnu general public license version 2"]),
    (
        "EPL-2.0",
        &["eclipse public license v 2.0", "eclipse public license version 2.0"],
    ),
    (
        "EPL-1.0",
        &["eclipse public license v 1.0", "eclipse public license version 1.0"],
    ),
    ("Apache-2.0", &["apache license version 2.0"]),
    ("BSL-1.0", &["boost software license version 1.0"]),
    ("CC0-1.0", &["cc0 1.0 universal"]),
];

/// (SPDX id, phrases that must all be present)
const WORDINGS: &[(&str, &[&str])] = &[
    (
        "BSD-3-Clause",
        &[
            "redistribution and use in source and binary forms",
            "neither the name",
        ],
    ),
    (
        "BSD-2-Clause",
        &["redistribution and use in source and binary forms"],
    ),
    ("MIT", &["permission is hereby granted free of charge"]),
    (
        "ISC",
        &["distribute this software for any purpose with or without fee"],
    ),
    (
        "Unlicense",
        &["this is free and unencumbered software released into the public domain"],
    ),
];

/// File name prefixes (upper-cased) that mark a license file
const LICENSE_FILE_PREFIXES: &[&str] = &["LICENSE", "LICENCE", "COPYING", "UNLICENSE"];

impl LicenseClassifier {
    /// Returns the SPDX identifier of the license in `text`, if recognized
    pub fn classify(text: &str) -> Option<&'static str> {
        // Padded so every phrase can be searched with a space on both sides
        let normalized = format!(" {} ", Self::normalize(text));
        Self::by_title(&normalized).or_else(|| Self::by_wording(&normalized))
    }

    fn by_title(normalized: &str) -> Option<&'static str> {
        TITLES
            .iter()
            .filter_map(|(id, titles)| {
                titles
                    .iter()
                    .filter_map(|title| normalized.find(&format!(" {} ", title)))
                    .min()
                    .map(|position| (position, *id))
            })
            .filter(|(position, _)| *position <= TITLE_WINDOW)
            .min_by_key(|(position, _)| *position)
            .map(|(_, id)| id)
    }

    fn by_wording(normalized: &str) -> Option<&'static str> {
        WORDINGS
            .iter()
            .find(|(_, phrases)| {
                phrases
                    .iter()
                    .all(|phrase| normalized.contains(&format!(" {} ", phrase)))
            })
            .map(|(id, _)| *id)
    }

    /// Whether a directory entry named `file_name` is a license file
    pub fn is_license_file_name(file_name: &str) -> bool {
        let upper = file_name.to_uppercase();
        if upper.ends_with(".GO") {
            return false;
        }
        LICENSE_FILE_PREFIXES
            .iter()
            .any(|prefix| upper.starts_with(prefix))
    }

    /// Joins the licenses of several files into one expression
    ///
    /// Distinct ids are kept in first-seen order and joined with ` OR `, the
    /// usual meaning of shipping e.g. `LICENSE-MIT` next to `LICENSE-APACHE`.
    pub fn combine<'a>(ids: impl IntoIterator<Item = &'a str>) -> Option<String> {
        let mut unique: Vec<&str> = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }

        if unique.is_empty() {
            None
        } else {
            Some(unique.join(" OR "))
        }
    }

    /// Lower-cases `text` and keeps only its words, `Version 2.0,` -> `version 2.0`
    fn normalize(text: &str) -> String {
        text.split(|c: char| !(c.is_alphanumeric() || c == '.'))
            .map(|word| word.trim_matches('.'))
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
