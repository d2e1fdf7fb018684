use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calendar;
use crate::error::DatasetError;
use crate::records::{FileAction, FileId, FileNode, Group, GroupId, Person, PersonId, Priority};
use constants::{dataset as defaults, layout};

/// Shape of the synthetic dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub people: usize,
    pub groups: usize,
    pub files: usize,
    /// Length of the timeline; files land on days `0..days` after the start.
    pub days: u32,
    pub seed: u64,
    /// First day of the timeline. `None` means the first day of the current month.
    pub start_date: Option<NaiveDate>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            people: defaults::PEOPLE_COUNT,
            groups: defaults::GROUP_COUNT,
            files: defaults::FILE_COUNT,
            days: layout::TOTAL_DAYS,
            seed: defaults::DEFAULT_SEED,
            start_date: None,
        }
    }
}

/// Immutable people, groups and files sharing one timeline.
///
/// Construction validates that every id matches its position and that every
/// file points at an existing group and person, so the lookups below index
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    people: Vec<Person>,
    groups: Vec<Group>,
    files: Vec<FileNode>,
    start_date: NaiveDate,
    day_count: u32,
}

impl Dataset {
    pub fn new(
        people: Vec<Person>,
        groups: Vec<Group>,
        files: Vec<FileNode>,
        start_date: NaiveDate,
        day_count: u32,
    ) -> Result<Self, DatasetError> {
        if people.is_empty() {
            return Err(DatasetError::Empty("people"));
        }
        if groups.is_empty() {
            return Err(DatasetError::Empty("groups"));
        }
        if day_count == 0 {
            return Err(DatasetError::Empty("days"));
        }

        for (position, person) in people.iter().enumerate() {
            if person.id.index() != position {
                return Err(misplaced("person", position, person.id));
            }
        }
        for (position, group) in groups.iter().enumerate() {
            if group.id.index() != position || group.layout_index != position {
                return Err(misplaced("group", position, group.id));
            }
        }
        for (position, file) in files.iter().enumerate() {
            if file.id.index() != position {
                return Err(misplaced("file", position, file.id));
            }
            if file.group_id.index() >= groups.len() {
                return Err(DatasetError::DanglingGroup {
                    file: file.id.to_string(),
                    group: file.group_id.to_string(),
                });
            }
            if file.person_id.index() >= people.len() {
                return Err(DatasetError::DanglingPerson {
                    file: file.id.to_string(),
                    person: file.person_id.to_string(),
                });
            }
        }

        Ok(Self {
            people,
            groups,
            files,
            start_date,
            day_count,
        })
    }

    /// Generate a dataset from `config`, seeding the generator with `config.seed`.
    pub fn generate(config: &DatasetConfig) -> Result<Self, DatasetError> {
        let start_date = config
            .start_date
            .unwrap_or_else(calendar::current_month_start);
        let mut rng = StdRng::seed_from_u64(config.seed);
        Self::generate_with(config, start_date, &mut rng)
    }

    pub fn generate_with<R: Rng + ?Sized>(
        config: &DatasetConfig,
        start_date: NaiveDate,
        rng: &mut R,
    ) -> Result<Self, DatasetError> {
        // gen_range panics on empty ranges, so reject these before sampling.
        if config.people == 0 {
            return Err(DatasetError::Empty("people"));
        }
        if config.groups == 0 {
            return Err(DatasetError::Empty("groups"));
        }
        if config.days == 0 {
            return Err(DatasetError::Empty("days"));
        }

        let people = (0..config.people).map(generate_person).collect();
        let groups = (0..config.groups).map(generate_group).collect();
        let files = (0..config.files)
            .map(|i| generate_file(i, config, start_date, rng))
            .collect();

        let dataset = Self::new(people, groups, files, start_date, config.days)?;
        info!(
            people = dataset.people.len(),
            groups = dataset.groups.len(),
            files = dataset.files.len(),
            start = %dataset.start_date,
            "generated dataset"
        );
        Ok(dataset)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn files(&self) -> &[FileNode] {
        &self.files
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Calendar days on the timeline, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.day_count).map(|offset| calendar::day_after(self.start_date, offset))
    }

    pub fn file(&self, id: FileId) -> Option<&FileNode> {
        self.files.get(id.index())
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.index())
    }

    /// Group owning `file`. Files of this dataset always resolve.
    pub fn group_of(&self, file: &FileNode) -> &Group {
        &self.groups[file.group_id.index()]
    }

    /// Person owning `file`. Files of this dataset always resolve.
    pub fn owner_of(&self, file: &FileNode) -> &Person {
        &self.people[file.person_id.index()]
    }

    /// Whether `date` falls on the timeline.
    pub fn contains_day(&self, date: NaiveDate) -> bool {
        let offset = calendar::day_offset(self.start_date, date);
        offset >= 0 && offset < i64::from(self.day_count)
    }
}

fn misplaced(kind: &'static str, position: usize, id: impl ToString) -> DatasetError {
    DatasetError::MisplacedId {
        kind,
        position,
        id: id.to_string(),
    }
}

fn generate_person(index: usize) -> Person {
    let names = defaults::PERSON_NAMES;
    let name = match names.get(index) {
        Some(name) => (*name).to_string(),
        None => format!("{} {}", names[index % names.len()], index / names.len() + 1),
    };
    Person {
        id: PersonId(index),
        name,
        hue: (index as f32 * defaults::PERSON_HUE_STEP) % 360.0,
    }
}

fn generate_group(index: usize) -> Group {
    let suffixes = defaults::GROUP_SUFFIXES;
    Group {
        id: GroupId(index),
        name: format!("Group {} - {}", index + 1, suffixes[index % suffixes.len()]),
        layout_index: index,
    }
}

fn generate_file<R: Rng + ?Sized>(
    index: usize,
    config: &DatasetConfig,
    start_date: NaiveDate,
    rng: &mut R,
) -> FileNode {
    let group_id = GroupId(rng.gen_range(0..config.groups));
    let person_id = PersonId(rng.gen_range(0..config.people));
    let day = rng.gen_range(0..config.days);
    let minute_of_day: i64 = rng.gen_range(8 * 60..18 * 60);
    let action = FileAction::ALL[rng.gen_range(0..FileAction::ALL.len())];
    let priority = Priority::ALL[rng.gen_range(0..Priority::ALL.len())];

    let date: DateTime<Utc> = calendar::midnight(calendar::day_after(start_date, day))
        + Duration::minutes(minute_of_day);

    let file = FileNode {
        id: FileId(index),
        name: format!("Invoice #{}", defaults::FIRST_INVOICE_NUMBER + index),
        group_id,
        person_id,
        date,
        action,
        priority,
    };
    debug!(id = %file.id, group = %group_id, day, "generated file");
    file
}
