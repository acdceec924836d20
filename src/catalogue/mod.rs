//! Read-only catalogue lookup
//!
//! Built once from the talent, age and event definitions and shared by every
//! life afterwards. Structural problems that would make a life misbehave are
//! rejected here; authoring gaps the engine can route around are reported as
//! warnings.

use crate::config::{AgeConfig, CatalogueData, EventConfig, TalentConfig};
use crate::error::{LifeSimError, Result};
use ahash::AHashMap;
use tracing::warn;

/// Number of rarity grades (0 rarest .. 3 most common)
pub const GRADE_COUNT: usize = 4;

/// Non-fatal catalogue problem found at build time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueWarning {
    /// No talent has this grade; draws landing here fall back to the first talent
    EmptyGrade(usize),
    /// Branch points at an event that does not exist and will be skipped
    UnknownBranchTarget { event: i32, target: i32 },
    /// Age pool lists an event that does not exist
    UnknownAgeEvent { age: i32, event: i32 },
    /// Age grants a talent that does not exist
    UnknownAgeTalent { age: i32, talent: i32 },
    /// An exclude group with no predicates always matches, so the event never fires randomly
    EmptyExcludeGroup(i32),
}

/// Indexed, validated catalogue
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    talents: Vec<TalentConfig>,
    talent_index: AHashMap<i32, usize>,
    by_grade: [Vec<usize>; GRADE_COUNT],
    events: AHashMap<i32, EventConfig>,
    ages: AHashMap<i32, AgeConfig>,
    warnings: Vec<CatalogueWarning>,
}

impl Catalogue {
    /// Index and validate the three catalogues.
    ///
    /// Talents keep their authoring order, which decides both the order inside
    /// each grade bucket and which talent is "first" for the empty-grade
    /// fallback.
    pub fn build(
        talents: Vec<TalentConfig>,
        ages: Vec<AgeConfig>,
        events: Vec<EventConfig>,
    ) -> Result<Self> {
        let mut talent_index = AHashMap::with_capacity(talents.len());
        let mut by_grade: [Vec<usize>; GRADE_COUNT] = Default::default();

        for (index, talent) in talents.iter().enumerate() {
            if talent_index.insert(talent.id, index).is_some() {
                return Err(LifeSimError::DuplicateTalent(talent.id));
            }
            let grade = usize::try_from(talent.grade)
                .ok()
                .filter(|g| *g < GRADE_COUNT)
                .ok_or(LifeSimError::InvalidGrade {
                    talent: talent.id,
                    grade: talent.grade,
                })?;
            by_grade[grade].push(index);
        }

        for talent in &talents {
            if let Some(&exclusive) = talent
                .exclude
                .iter()
                .find(|id| !talent_index.contains_key(*id))
            {
                return Err(LifeSimError::UnknownExclusiveTalent {
                    talent: talent.id,
                    exclusive,
                });
            }
        }

        let mut event_map = AHashMap::with_capacity(events.len());
        for event in events {
            let id = event.id;
            if event_map.insert(id, event).is_some() {
                return Err(LifeSimError::DuplicateEvent(id));
            }
        }

        let mut age_map = AHashMap::with_capacity(ages.len());
        for age in ages {
            let key = age.age;
            if age_map.insert(key, age).is_some() {
                return Err(LifeSimError::DuplicateAge(key));
            }
        }

        if let Some(cycle) = find_branch_cycle(&event_map) {
            return Err(LifeSimError::BranchCycle(cycle));
        }

        let mut catalogue = Self {
            talents,
            talent_index,
            by_grade,
            events: event_map,
            ages: age_map,
            warnings: Vec::new(),
        };
        catalogue.warnings = catalogue.collect_warnings();
        for warning in &catalogue.warnings {
            warn!(?warning, "catalogue warning");
        }

        Ok(catalogue)
    }

    pub fn from_data(data: CatalogueData) -> Result<Self> {
        Self::build(data.talents, data.ages, data.events)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_data(CatalogueData::from_json(json)?)
    }

    #[inline]
    pub fn talent(&self, id: i32) -> Option<&TalentConfig> {
        self.talent_index.get(&id).map(|&i| &self.talents[i])
    }

    #[inline]
    pub fn event(&self, id: i32) -> Option<&EventConfig> {
        self.events.get(&id)
    }

    #[inline]
    pub fn age(&self, age: i32) -> Option<&AgeConfig> {
        self.ages.get(&age)
    }

    /// Talents in authoring order
    pub fn talents(&self) -> &[TalentConfig] {
        &self.talents
    }

    pub fn first_talent(&self) -> Option<&TalentConfig> {
        self.talents.first()
    }

    /// Number of talents with the given grade
    pub fn grade_len(&self, grade: usize) -> usize {
        self.by_grade.get(grade).map_or(0, Vec::len)
    }

    /// `index`-th talent of a grade bucket
    pub fn grade_talent(&self, grade: usize, index: usize) -> Option<&TalentConfig> {
        let slot = *self.by_grade.get(grade)?.get(index)?;
        self.talents.get(slot)
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn warnings(&self) -> &[CatalogueWarning] {
        &self.warnings
    }

    fn collect_warnings(&self) -> Vec<CatalogueWarning> {
        let mut warnings = Vec::new();

        if !self.talents.is_empty() {
            for grade in 0..GRADE_COUNT {
                if self.by_grade[grade].is_empty() {
                    warnings.push(CatalogueWarning::EmptyGrade(grade));
                }
            }
        }

        let mut event_ids: Vec<i32> = self.events.keys().copied().collect();
        event_ids.sort_unstable();
        for id in event_ids {
            let event = &self.events[&id];
            if event.exclude.as_ref().is_some_and(|g| g.is_empty()) {
                warnings.push(CatalogueWarning::EmptyExcludeGroup(id));
            }
            for branch in &event.branch {
                if !self.events.contains_key(&branch.event_id) {
                    warnings.push(CatalogueWarning::UnknownBranchTarget {
                        event: id,
                        target: branch.event_id,
                    });
                }
            }
        }

        let mut ages: Vec<i32> = self.ages.keys().copied().collect();
        ages.sort_unstable();
        for age in ages {
            let entry = &self.ages[&age];
            for &(event, _) in &entry.events {
                if !self.events.contains_key(&event) {
                    warnings.push(CatalogueWarning::UnknownAgeEvent { age, event });
                }
            }
            for &talent in &entry.talents {
                if !self.talent_index.contains_key(&talent) {
                    warnings.push(CatalogueWarning::UnknownAgeTalent { age, talent });
                }
            }
        }

        warnings
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Depth-first search over resolvable branch edges. Returns the first cycle
/// found, closed with its starting id, e.g. `[1, 2, 1]`.
fn find_branch_cycle(events: &AHashMap<i32, EventConfig>) -> Option<Vec<i32>> {
    let mut marks: AHashMap<i32, Mark> = AHashMap::with_capacity(events.len());
    let mut roots: Vec<i32> = events.keys().copied().collect();
    roots.sort_unstable();

    for root in roots {
        if marks.contains_key(&root) {
            continue;
        }
        marks.insert(root, Mark::Visiting);
        let mut stack: Vec<(i32, usize)> = vec![(root, 0)];

        while let Some(&(id, next)) = stack.last() {
            let branches = events.get(&id).map_or(&[][..], |e| e.branch.as_slice());
            if next >= branches.len() {
                marks.insert(id, Mark::Done);
                stack.pop();
                continue;
            }
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }

            let target = branches[next].event_id;
            if !events.contains_key(&target) {
                continue;
            }
            match marks.get(&target) {
                Some(Mark::Visiting) => {
                    let start = stack.iter().position(|(e, _)| *e == target).unwrap_or(0);
                    let mut cycle: Vec<i32> = stack[start..].iter().map(|(e, _)| *e).collect();
                    cycle.push(target);
                    return Some(cycle);
                }
                Some(Mark::Done) => {}
                None => {
                    marks.insert(target, Mark::Visiting);
                    stack.push((target, 0));
                }
            }
        }
    }

    None
}
