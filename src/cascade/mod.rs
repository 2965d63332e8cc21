//! Cascading selection over the academic hierarchy.
//!
//! Program -> Year -> Branch -> Section form a strict hierarchy. Selecting a
//! value at one level clears every selection below it and fetches the child
//! option set through the [`HierarchyCache`]; a control is enabled only while
//! its parent selection is non-empty. There is no backward history: each
//! transition is a full forward cut of descendant state, so a stale selection
//! can never reference a deleted ancestor.
//!
//! Responses are epoch-stamped. A fetch that resolves after the selection has
//! moved on is discarded instead of overwriting newer state.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::cache::HierarchyCache;
use crate::errors::ClientError;
use crate::models::EntityId;

/// Levels of the academic hierarchy, ordered parent-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Program,
    Year,
    Branch,
    Section,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Program, Level::Year, Level::Branch, Level::Section];

    /// The level directly beneath this one.
    pub fn child(self) -> Option<Level> {
        match self {
            Level::Program => Some(Level::Year),
            Level::Year => Some(Level::Branch),
            Level::Branch => Some(Level::Section),
            Level::Section => None,
        }
    }

    /// The level directly above this one.
    pub fn parent(self) -> Option<Level> {
        match self {
            Level::Program => None,
            Level::Year => Some(Level::Program),
            Level::Branch => Some(Level::Year),
            Level::Section => Some(Level::Branch),
        }
    }

    /// Every level strictly below this one.
    pub fn descendants(self) -> &'static [Level] {
        match self {
            Level::Program => &[Level::Year, Level::Branch, Level::Section],
            Level::Year => &[Level::Branch, Level::Section],
            Level::Branch => &[Level::Section],
            Level::Section => &[],
        }
    }
}

/// One entry in a dropdown: the entity id and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildOption {
    pub id: EntityId,
    pub label: String,
}

impl ChildOption {
    pub fn new(id: EntityId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Provider of hierarchy options, implemented by the API client and by test
/// doubles.
#[async_trait]
pub trait ChildSource: Send + Sync {
    /// Options at the top level (programs), which have no parent.
    async fn roots(&self) -> Result<Vec<ChildOption>, ClientError>;

    /// Options available at `level` beneath the given parent entity.
    async fn children(&self, level: Level, parent: EntityId)
        -> Result<Vec<ChildOption>, ClientError>;
}

type CascadeCache = HierarchyCache<(Level, EntityId), Vec<ChildOption>>;

#[derive(Debug, Default)]
struct CascadeState {
    selection: HashMap<Level, EntityId>,
    options: HashMap<Level, Vec<ChildOption>>,
    /// Epoch a level's next arriving option set must carry to be applied.
    pending: HashMap<Level, u64>,
    counter: u64,
}

/// Single-select cascade used by the Student and Section screens.
pub struct CascadeController<S> {
    source: S,
    cache: CascadeCache,
    state: Arc<Mutex<CascadeState>>,
}

impl<S: Clone> Clone for CascadeController<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            cache: self.cache.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: ChildSource> CascadeController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HierarchyCache::new(),
            state: Arc::new(Mutex::new(CascadeState::default())),
        }
    }

    /// Populate the Program option set.
    pub async fn load_roots(&self) -> Result<Vec<ChildOption>, ClientError> {
        let roots = self.source.roots().await?;
        let mut st = self.lock();
        st.options.insert(Level::Program, roots.clone());
        Ok(roots)
    }

    /// Record a selection at `level`, cut all descendant state, and fetch the
    /// child option set. A response that arrives after a newer transition at
    /// the same level is discarded.
    pub async fn select(&self, level: Level, id: EntityId) -> Result<(), ClientError> {
        let (epoch, child) = {
            let mut st = self.lock();
            st.selection.insert(level, id);
            for d in level.descendants() {
                st.selection.remove(d);
                st.options.remove(d);
                st.pending.remove(d);
            }
            st.counter += 1;
            let epoch = st.counter;
            let child = level.child();
            if let Some(c) = child {
                st.pending.insert(c, epoch);
            }
            (epoch, child)
        };

        let Some(child) = child else {
            return Ok(());
        };

        let source = &self.source;
        let children = self
            .cache
            .get_or_fetch((child, id), || source.children(child, id))
            .await?;

        let mut st = self.lock();
        if st.pending.get(&child) == Some(&epoch) {
            st.pending.remove(&child);
            st.options.insert(child, children);
        } else {
            tracing::debug!(level = ?child, "discarding stale child options");
        }
        Ok(())
    }

    /// Clear the selection at `level` and everything beneath it.
    pub fn clear_from(&self, level: Level) {
        let mut st = self.lock();
        st.selection.remove(&level);
        for d in level.descendants() {
            st.selection.remove(d);
            st.options.remove(d);
            st.pending.remove(d);
        }
        st.counter += 1;
    }

    pub fn selection(&self, level: Level) -> Option<EntityId> {
        self.lock().selection.get(&level).copied()
    }

    pub fn options(&self, level: Level) -> Vec<ChildOption> {
        self.lock().options.get(&level).cloned().unwrap_or_default()
    }

    /// A control is enabled only while its parent selection is non-empty;
    /// the root level is always enabled.
    pub fn is_enabled(&self, level: Level) -> bool {
        match level.parent() {
            None => true,
            Some(parent) => self.lock().selection.contains_key(&parent),
        }
    }

    /// Drop cached children of `parent`; called after a create/update/delete
    /// at `level`.
    pub fn invalidate_children(&self, level: Level, parent: EntityId) {
        self.cache.invalidate(&(level, parent));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CascadeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[derive(Debug, Default)]
struct ExamCascadeState {
    program: Option<EntityId>,
    year: Option<EntityId>,
    year_options: Vec<ChildOption>,
    branch_options: Vec<ChildOption>,
    branches: Vec<EntityId>,
    section_options: Vec<ChildOption>,
    sections: Vec<EntityId>,
    counter: u64,
    pending_years: Option<u64>,
    pending_branches: Option<u64>,
    pending_sections: Option<u64>,
}

/// Multi-select cascade used by the exam scheduling form: single-select
/// program and year, multi-select branches, with the section option set
/// derived as the deduplicated union of sections across selected branches.
pub struct ExamCascade<S> {
    source: S,
    cache: CascadeCache,
    state: Arc<Mutex<ExamCascadeState>>,
}

impl<S: Clone> Clone for ExamCascade<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            cache: self.cache.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> ExamCascade<S>
where
    S: ChildSource + Clone + 'static,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HierarchyCache::new(),
            state: Arc::new(Mutex::new(ExamCascadeState::default())),
        }
    }

    /// Select a program, clearing year, branches and sections.
    pub async fn select_program(&self, id: EntityId) -> Result<(), ClientError> {
        let epoch = {
            let mut st = self.lock();
            st.program = Some(id);
            st.year = None;
            st.year_options.clear();
            st.pending_branches = None;
            Self::cut_branches(&mut st);
            st.counter += 1;
            st.pending_years = Some(st.counter);
            st.counter
        };

        let source = &self.source;
        let years = self
            .cache
            .get_or_fetch((Level::Year, id), || source.children(Level::Year, id))
            .await?;

        let mut st = self.lock();
        if st.pending_years == Some(epoch) {
            st.pending_years = None;
            st.year_options = years;
        }
        Ok(())
    }

    /// Select a year, clearing branches and sections.
    pub async fn select_year(&self, id: EntityId) -> Result<(), ClientError> {
        let epoch = {
            let mut st = self.lock();
            if st.program.is_none() {
                return Err(ClientError::Validation(
                    "Select a program before choosing a year".to_string(),
                ));
            }
            st.year = Some(id);
            Self::cut_branches(&mut st);
            st.counter += 1;
            st.pending_branches = Some(st.counter);
            st.counter
        };

        let source = &self.source;
        let branches = self
            .cache
            .get_or_fetch((Level::Branch, id), || source.children(Level::Branch, id))
            .await?;

        let mut st = self.lock();
        if st.pending_branches == Some(epoch) {
            st.pending_branches = None;
            st.branch_options = branches;
        }
        Ok(())
    }

    /// Replace the branch multi-selection and re-derive the section option
    /// set as the union of each branch's sections, deduplicated by id.
    ///
    /// Fetches fan out concurrently, one per branch, and the state updates
    /// only after all have settled; a failed branch degrades to an empty list
    /// for that branch rather than aborting the join. Section ids that left
    /// the derived set are pruned from the current section selection.
    pub async fn set_branches(&self, ids: Vec<EntityId>) -> Result<(), ClientError> {
        let (epoch, ids) = {
            let mut st = self.lock();
            if st.year.is_none() {
                return Err(ClientError::Validation(
                    "Select a year before choosing branches".to_string(),
                ));
            }
            let mut seen = HashSet::new();
            let ids: Vec<EntityId> = ids.into_iter().filter(|id| seen.insert(*id)).collect();
            st.branches = ids.clone();
            st.counter += 1;
            st.pending_sections = Some(st.counter);
            (st.counter, ids)
        };

        let mut handles = Vec::with_capacity(ids.len());
        for id in &ids {
            let id = *id;
            let source = self.source.clone();
            let cache = self.cache.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_fetch((Level::Section, id), || async {
                        source.children(Level::Section, id).await
                    })
                    .await
            }));
        }

        let mut union: Vec<ChildOption> = Vec::new();
        let mut seen = HashSet::new();
        for (id, handle) in ids.iter().zip(handles) {
            match handle.await {
                Ok(Ok(sections)) => {
                    for option in sections {
                        if seen.insert(option.id) {
                            union.push(option);
                        }
                    }
                }
                Ok(Err(err)) => {
                    tracing::warn!(branch = id, error = %err, "failed to fetch sections; treating branch as empty");
                }
                Err(err) => {
                    tracing::warn!(branch = id, error = %err, "section fetch task failed; treating branch as empty");
                }
            }
        }

        let mut st = self.lock();
        if st.pending_sections == Some(epoch) {
            st.pending_sections = None;
            let valid: HashSet<EntityId> = union.iter().map(|o| o.id).collect();
            st.section_options = union;
            st.sections.retain(|id| valid.contains(id));
        }
        Ok(())
    }

    /// Add or remove a single branch from the multi-selection.
    pub async fn toggle_branch(&self, id: EntityId) -> Result<(), ClientError> {
        let mut ids = self.lock().branches.clone();
        match ids.iter().position(|b| *b == id) {
            Some(pos) => {
                ids.remove(pos);
            }
            None => ids.push(id),
        }
        self.set_branches(ids).await
    }

    /// Replace the section multi-selection, keeping only ids present in the
    /// derived option set.
    pub fn set_sections(&self, ids: Vec<EntityId>) {
        let mut st = self.lock();
        let valid: HashSet<EntityId> = st.section_options.iter().map(|o| o.id).collect();
        let mut seen = HashSet::new();
        st.sections = ids
            .into_iter()
            .filter(|id| valid.contains(id) && seen.insert(*id))
            .collect();
    }

    pub fn program(&self) -> Option<EntityId> {
        self.lock().program
    }

    pub fn year(&self) -> Option<EntityId> {
        self.lock().year
    }

    pub fn branches(&self) -> Vec<EntityId> {
        self.lock().branches.clone()
    }

    pub fn sections(&self) -> Vec<EntityId> {
        self.lock().sections.clone()
    }

    pub fn year_options(&self) -> Vec<ChildOption> {
        self.lock().year_options.clone()
    }

    pub fn branch_options(&self) -> Vec<ChildOption> {
        self.lock().branch_options.clone()
    }

    pub fn section_options(&self) -> Vec<ChildOption> {
        self.lock().section_options.clone()
    }

    pub fn is_year_enabled(&self) -> bool {
        self.lock().program.is_some()
    }

    pub fn is_branch_enabled(&self) -> bool {
        self.lock().year.is_some()
    }

    pub fn is_section_enabled(&self) -> bool {
        !self.lock().branches.is_empty()
    }

    /// Drop cached children of `parent` after a mutation at `level`.
    pub fn invalidate_children(&self, level: Level, parent: EntityId) {
        self.cache.invalidate(&(level, parent));
    }

    fn cut_branches(st: &mut ExamCascadeState) {
        st.branch_options.clear();
        st.branches.clear();
        st.section_options.clear();
        st.sections.clear();
        st.pending_sections = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ExamCascadeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    /// Test double serving a fixed hierarchy with optional per-parent delays
    /// and failures, counting every fetch.
    #[derive(Clone, Default)]
    struct FixtureSource {
        children: Arc<HashMap<(Level, EntityId), Vec<ChildOption>>>,
        delays: Arc<HashMap<(Level, EntityId), u64>>,
        failing: Arc<HashSet<(Level, EntityId)>>,
        calls: Arc<AtomicUsize>,
    }

    impl FixtureSource {
        fn new() -> Self {
            let mut children = HashMap::new();
            // Program 1 -> years 10, 11; year 10 -> branches 100, 101
            children.insert(
                (Level::Year, 1),
                vec![ChildOption::new(10, "2022-2026"), ChildOption::new(11, "2023-2027")],
            );
            children.insert((Level::Year, 2), vec![ChildOption::new(12, "2021-2025")]);
            children.insert(
                (Level::Branch, 10),
                vec![ChildOption::new(100, "CSE"), ChildOption::new(101, "ECE")],
            );
            children.insert(
                (Level::Section, 100),
                vec![ChildOption::new(1000, "CSE-A"), ChildOption::new(1001, "CSE-B")],
            );
            // 1003 shares the "CSE-B" label with 1000-branch section 1001,
            // pinning dedup/prune-by-id semantics.
            children.insert(
                (Level::Section, 101),
                vec![ChildOption::new(1002, "ECE-A"), ChildOption::new(1003, "CSE-B")],
            );
            Self {
                children: Arc::new(children),
                ..Self::default()
            }
        }

        fn with_delay(mut self, key: (Level, EntityId), millis: u64) -> Self {
            let mut delays = (*self.delays).clone();
            delays.insert(key, millis);
            self.delays = Arc::new(delays);
            self
        }

        fn with_failure(mut self, key: (Level, EntityId)) -> Self {
            let mut failing = (*self.failing).clone();
            failing.insert(key);
            self.failing = Arc::new(failing);
            self
        }
    }

    #[async_trait]
    impl ChildSource for FixtureSource {
        async fn roots(&self) -> Result<Vec<ChildOption>, ClientError> {
            Ok(vec![ChildOption::new(1, "B.Tech"), ChildOption::new(2, "M.Tech")])
        }

        async fn children(
            &self,
            level: Level,
            parent: EntityId,
        ) -> Result<Vec<ChildOption>, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(millis) = self.delays.get(&(level, parent)) {
                tokio::time::sleep(Duration::from_millis(*millis)).await;
            }
            if self.failing.contains(&(level, parent)) {
                return Err(ClientError::Network("backend unreachable".to_string()));
            }
            Ok(self.children.get(&(level, parent)).cloned().unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn test_select_clears_descendants_and_disables_controls() {
        let controller = CascadeController::new(FixtureSource::new());
        controller.load_roots().await.unwrap();

        controller.select(Level::Program, 1).await.unwrap();
        controller.select(Level::Year, 10).await.unwrap();
        controller.select(Level::Branch, 100).await.unwrap();
        controller.select(Level::Section, 1000).await.unwrap();
        assert!(controller.is_enabled(Level::Section));

        // Re-selecting the program cuts everything below it.
        controller.select(Level::Program, 2).await.unwrap();
        assert_eq!(controller.selection(Level::Program), Some(2));
        assert_eq!(controller.selection(Level::Year), None);
        assert_eq!(controller.selection(Level::Branch), None);
        assert_eq!(controller.selection(Level::Section), None);
        assert!(controller.options(Level::Branch).is_empty());
        assert!(controller.is_enabled(Level::Year));
        assert!(!controller.is_enabled(Level::Branch));
        assert!(!controller.is_enabled(Level::Section));

        let year_labels: Vec<_> = controller
            .options(Level::Year)
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(year_labels, vec!["2021-2025"]);
    }

    #[tokio::test]
    async fn test_repeat_selection_served_from_cache() {
        let source = FixtureSource::new();
        let calls = Arc::clone(&source.calls);
        let controller = CascadeController::new(source);

        controller.select(Level::Program, 1).await.unwrap();
        controller.select(Level::Program, 2).await.unwrap();
        controller.select(Level::Program, 1).await.unwrap();
        // Two distinct parents fetched once each.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_children_refetches() {
        let source = FixtureSource::new();
        let calls = Arc::clone(&source.calls);
        let controller = CascadeController::new(source);

        controller.select(Level::Program, 1).await.unwrap();
        controller.invalidate_children(Level::Year, 1);
        controller.select(Level::Program, 1).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_stale_response_discarded() {
        // Program 1's years resolve slowly; program 2's instantly. Selecting
        // 1 then 2 must leave 2's years displayed even though 1 finishes last.
        let source = FixtureSource::new().with_delay((Level::Year, 1), 100);
        let controller = Arc::new(CascadeController::new(source));

        let slow = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move { controller.select(Level::Program, 1).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        controller.select(Level::Program, 2).await.unwrap();
        slow.await.unwrap().unwrap();

        assert_eq!(controller.selection(Level::Program), Some(2));
        let labels: Vec<_> = controller
            .options(Level::Year)
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, vec!["2021-2025"]);
    }

    #[tokio::test]
    async fn test_exam_cascade_section_union_dedup() {
        let cascade = ExamCascade::new(FixtureSource::new());
        cascade.select_program(1).await.unwrap();
        cascade.select_year(10).await.unwrap();

        cascade.set_branches(vec![100, 101]).await.unwrap();
        let ids: Vec<_> = cascade.section_options().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1000, 1001, 1002, 1003]);
        assert!(cascade.is_section_enabled());

        // Select one section per branch, including the name collision pair.
        cascade.set_sections(vec![1001, 1003]);
        assert_eq!(cascade.sections(), vec![1001, 1003]);

        // Dropping branch 100 removes its sections from options and from the
        // selection, even though 1001 ("CSE-B") collides by name with 1003.
        cascade.set_branches(vec![101]).await.unwrap();
        let ids: Vec<_> = cascade.section_options().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1002, 1003]);
        assert_eq!(cascade.sections(), vec![1003]);
    }

    #[tokio::test]
    async fn test_exam_cascade_partial_failure_degrades() {
        let source = FixtureSource::new().with_failure((Level::Section, 101));
        let cascade = ExamCascade::new(source);
        cascade.select_program(1).await.unwrap();
        cascade.select_year(10).await.unwrap();

        cascade.set_branches(vec![100, 101]).await.unwrap();
        let ids: Vec<_> = cascade.section_options().iter().map(|o| o.id).collect();
        // Branch 101 degraded to empty; branch 100's sections survive.
        assert_eq!(ids, vec![1000, 1001]);
    }

    #[tokio::test]
    async fn test_exam_cascade_program_change_cuts_everything() {
        let cascade = ExamCascade::new(FixtureSource::new());
        cascade.select_program(1).await.unwrap();
        cascade.select_year(10).await.unwrap();
        cascade.set_branches(vec![100]).await.unwrap();
        cascade.set_sections(vec![1000]);

        cascade.select_program(2).await.unwrap();
        assert_eq!(cascade.year(), None);
        assert!(cascade.branches().is_empty());
        assert!(cascade.sections().is_empty());
        assert!(cascade.branch_options().is_empty());
        assert!(cascade.section_options().is_empty());
        assert!(!cascade.is_branch_enabled());
        assert!(!cascade.is_section_enabled());
    }

    #[tokio::test]
    async fn test_exam_cascade_requires_parent_selection() {
        let cascade = ExamCascade::new(FixtureSource::new());
        assert!(cascade.select_year(10).await.is_err());
        assert!(cascade.set_branches(vec![100]).await.is_err());
    }
}
