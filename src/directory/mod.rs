use crate::utils;

/// One directory entry as handed out by the provider. Immutable for the
/// session: the store never rewrites a record after the initial load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub picture_url: String,
    /// ISO date-time string, e.g. "1990-03-07T10:20:45.123Z".
    pub birth_date: String,
}

impl PersonRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn city_state(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// "street, city, state postcode", as shown in the detail overlay.
    pub fn address_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.postcode
        )
    }

    /// Birth date reformatted as MM/DD/YYYY; falls back to the raw provider
    /// string when it is not a valid ISO date-time.
    pub fn birthday(&self) -> String {
        utils::format_birthday(&self.birth_date)
    }

    /// Two-letter avatar shown in place of the photo at card size.
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next().unwrap_or('?');
        let last = self.last_name.chars().next().unwrap_or('?');
        format!("{}{}", first, last).to_uppercase()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// In-memory store for the fetched records plus the overlay cursor. This is
/// the only mutable shared state in the program; everything else borrows
/// records by index.
#[derive(Debug, Default)]
pub struct Directory {
    records: Vec<PersonRecord>,
    cursor: Option<usize>,
    loaded: bool,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale replacement of the record list. Called exactly once, after
    /// a successful fetch; there is no partial or incremental load.
    pub fn load(&mut self, records: Vec<PersonRecord>) {
        self.records = records;
        self.loaded = true;
    }

    /// Whether the fetch has resolved. Distinguishes "no data yet" from
    /// "loaded but empty" so the UI can show a loading state.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&PersonRecord> {
        self.records.get(index)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The record the cursor points at, if any.
    pub fn focused(&self) -> Option<&PersonRecord> {
        self.cursor.and_then(|i| self.get(i))
    }

    /// Focus a record by index. Out-of-range indices are a bug in the
    /// caller (a hit region and the store disagreeing), so assert rather
    /// than clamp.
    pub fn set_cursor(&mut self, index: usize) {
        assert!(
            index < self.records.len(),
            "cursor {} out of range for {} records",
            index,
            self.records.len()
        );
        self.cursor = Some(index);
    }

    /// Move the cursor one step with wraparound and return the new index.
    /// Requires at least one record and an active cursor.
    pub fn advance(&mut self, direction: Direction) -> usize {
        assert!(!self.is_empty(), "advance on an empty directory");
        let len = self.records.len();
        let current = self.cursor.expect("advance without an active cursor");
        let next = match direction {
            Direction::Next => (current + 1) % len,
            Direction::Prev => (current + len - 1) % len,
        };
        self.cursor = Some(next);
        next
    }
}
