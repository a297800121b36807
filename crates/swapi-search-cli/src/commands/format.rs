use swapi_search::Character;
use swapi_search_tui::view::count_label;

const MAX_NAME_WIDTH: usize = 35;

/// Render `characters` as an aligned name / birth year / gender table,
/// followed by a count line.
pub fn character_table(characters: &[Character]) -> String {
    let name_width = characters
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .clamp("Name".len(), MAX_NAME_WIDTH);
    let year_width = characters
        .iter()
        .map(|c| c.birth_year.chars().count())
        .max()
        .unwrap_or(0)
        .max("Birth Year".len());

    let mut out = String::new();
    out.push_str(&format!(
        "  {:<name_width$}  {:<year_width$}  {}\n",
        "Name", "Birth Year", "Gender"
    ));
    for character in characters {
        out.push_str(&format!(
            "  {:<name_width$}  {:<year_width$}  {}\n",
            truncate(&character.name, name_width),
            character.birth_year,
            character.gender,
        ));
    }
    out.push_str(&format!("\n{}\n", count_label(characters.len())));
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_owned()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let mut out: String = s.chars().take(max - 3).collect();
        out.push_str("...");
        out
    }
}
