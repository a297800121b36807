use swapi_search::{Character, CharacterId};

/// Which detail line of an expanded record a row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Name,
    BirthYear,
    Gender,
}

impl DetailField {
    pub const ALL: [DetailField; 3] = [Self::Name, Self::BirthYear, Self::Gender];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::BirthYear => "Birth Year",
            Self::Gender => "Gender",
        }
    }

    pub fn value(self, character: &Character) -> &str {
        match self {
            Self::Name => &character.name,
            Self::BirthYear => &character.birth_year,
            Self::Gender => &character.gender,
        }
    }
}

/// A single row in the flattened, navigable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    /// The always-visible header of a record.
    Header { index: usize },
    /// A detail line, present only while the record is expanded.
    Detail { index: usize, field: DetailField },
}

impl ListRow {
    pub fn index(&self) -> usize {
        match self {
            Self::Header { index } | Self::Detail { index, .. } => *index,
        }
    }
}

/// Tracks which record, if any, is expanded. At most one at a time.
///
/// The key may go stale when the records change underneath it; a stale
/// key simply matches nothing.
#[derive(Debug, Clone, Default)]
pub struct SelectableList {
    selected: Option<CharacterId>,
}

impl SelectableList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&CharacterId> {
        self.selected.as_ref()
    }

    /// Deselect if `key` is already selected, otherwise select it.
    pub fn toggle(&mut self, key: &CharacterId) {
        if self.selected.as_ref() == Some(key) {
            self.selected = None;
        } else {
            self.selected = Some(key.clone());
        }
    }

    pub fn is_selected(&self, character: &Character) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|key| key.as_str() == character.url)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Flatten `records` into rows, expanding the selected one.
    pub fn rows(&self, records: &[Character]) -> Vec<ListRow> {
        let mut rows = Vec::with_capacity(records.len() + DetailField::ALL.len());
        for (index, character) in records.iter().enumerate() {
            rows.push(ListRow::Header { index });
            if self.is_selected(character) {
                rows.extend(
                    DetailField::ALL
                        .iter()
                        .map(|&field| ListRow::Detail { index, field }),
                );
            }
        }
        rows
    }
}

/// Row range `[start, end]` occupied by record `index`, if present.
pub fn record_span(rows: &[ListRow], index: usize) -> Option<(usize, usize)> {
    let start = rows.iter().position(|row| row.index() == index)?;
    let len = rows[start..]
        .iter()
        .take_while(|row| row.index() == index)
        .count();
    Some((start, start + len - 1))
}
