//! In-memory timetable store.
//!
//! Owns the staff roster, subject catalogue, grid configuration and the
//! last saved timetable for one class. All mutation goes through this
//! API; generation reads a snapshot and hands it to the
//! [`Timetabler`] by value.

use rand::Rng;

use crate::error::TimetableError;
use crate::models::{
    ClassDetails, ScheduleConfiguration, Staff, StaffCommitments, Subject, TimeSlot, Timetable,
};
use crate::scheduler::{empty_timetable, TimetableRequest, Timetabler};
use crate::validation::{validate_input, ValidationResult};

/// Catalogue and timetable for a single class.
#[derive(Debug, Clone, Default)]
pub struct TimetableStore {
    staff: Vec<Staff>,
    subjects: Vec<Subject>,
    settings: ScheduleConfiguration,
    timetable: Timetable,
}

impl TimetableStore {
    /// Creates an empty store with the default grid configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with the given configuration.
    pub fn with_settings(settings: ScheduleConfiguration) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn settings(&self) -> &ScheduleConfiguration {
        &self.settings
    }

    /// The last saved timetable (empty until generated or reset).
    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    pub fn add_staff(&mut self, staff: Staff) {
        self.staff.push(staff);
    }

    /// Replaces the staff member with the same id.
    pub fn update_staff(&mut self, staff: Staff) -> Result<(), TimetableError> {
        let existing = self
            .staff
            .iter_mut()
            .find(|s| s.id == staff.id)
            .ok_or_else(|| TimetableError::StaffNotFound(staff.id.clone()))?;
        *existing = staff;
        Ok(())
    }

    pub fn add_subject(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }

    /// Replaces the subject with the same id, keeping its catalogue position.
    pub fn update_subject(&mut self, subject: Subject) -> Result<(), TimetableError> {
        let existing = self
            .subjects
            .iter_mut()
            .find(|s| s.id == subject.id)
            .ok_or_else(|| TimetableError::SubjectNotFound(subject.id.clone()))?;
        *existing = subject;
        Ok(())
    }

    pub fn update_settings(&mut self, settings: ScheduleConfiguration) {
        self.settings = settings;
    }

    pub fn update_class_details(&mut self, details: ClassDetails) {
        self.settings.class_details = details;
    }

    pub fn save_timetable(&mut self, timetable: Timetable) {
        self.timetable = timetable;
    }

    /// Replaces one slot of the saved timetable (manual edit).
    pub fn update_slot(&mut self, slot: TimeSlot) {
        self.timetable.update_slot(slot);
    }

    /// Replaces the saved timetable with an empty grid.
    pub fn reset_timetable(&mut self) -> &Timetable {
        self.timetable = empty_timetable(&self.settings);
        &self.timetable
    }

    pub fn subject_by_id(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn staff_by_id(&self, id: &str) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }

    /// Staff assigned to the given subject.
    pub fn staff_by_subject_id(&self, subject_id: &str) -> Option<&Staff> {
        self.subject_by_id(subject_id)
            .and_then(|subject| self.staff_by_id(&subject.staff_id))
    }

    /// Runs advisory validation on the stored catalogue.
    pub fn validate(&self) -> ValidationResult {
        validate_input(&self.subjects, &self.staff, &self.settings)
    }

    /// Snapshot of the catalogue as a generation request.
    pub fn request(&self) -> TimetableRequest {
        TimetableRequest::new(self.subjects.clone(), self.staff.clone())
            .with_settings(self.settings.clone())
    }

    /// Generates and saves a new timetable.
    ///
    /// # Errors
    /// [`TimetableError::NoSubjects`] or [`TimetableError::NoStaff`] if
    /// the catalogue is empty; the saved timetable is left untouched.
    pub fn generate<R: Rng>(
        &mut self,
        timetabler: &Timetabler,
        commitments: StaffCommitments,
        rng: &mut R,
    ) -> Result<&Timetable, TimetableError> {
        if self.subjects.is_empty() {
            return Err(TimetableError::NoSubjects);
        }
        if self.staff.is_empty() {
            return Err(TimetableError::NoStaff);
        }

        let request = self.request().with_commitments(commitments);
        self.timetable = timetabler.generate_with_rng(&request, rng);
        tracing::info!(
            slots = self.timetable.len(),
            free = self.timetable.free_slot_count(),
            "Timetable generated"
        );
        Ok(&self.timetable)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::models::Weekday;
    use crate::scheduler::testing::{sample_staff, sample_subjects};
    use crate::validation::ValidationErrorKind;

    fn loaded_store() -> TimetableStore {
        let mut store = TimetableStore::new();
        for s in sample_staff() {
            store.add_staff(s);
        }
        for s in sample_subjects(2) {
            store.add_subject(s);
        }
        store
    }

    #[test]
    fn test_lookups() {
        let store = loaded_store();
        assert_eq!(store.staff().len(), 6);
        assert_eq!(store.subjects().len(), 12);
        assert_eq!(store.subject_by_id("OS").unwrap().periods_per_week, 6);
        assert_eq!(store.staff_by_id("T3").unwrap().name, "Teacher 3");
        assert_eq!(store.staff_by_subject_id("ML LAB").unwrap().id, "T3");
        assert!(store.staff_by_subject_id("NONE").is_none());
        assert!(store.subject_by_id("NONE").is_none());
    }

    #[test]
    fn test_updates() {
        let mut store = loaded_store();
        store
            .update_subject(Subject::new("OS", "T1").with_periods_per_week(4))
            .unwrap();
        assert_eq!(store.subject_by_id("OS").unwrap().staff_id, "T1");
        assert_eq!(store.subjects()[1].id, "OS");

        store
            .update_staff(Staff::new("T1").with_name("Renamed"))
            .unwrap();
        assert_eq!(store.staff_by_id("T1").unwrap().name, "Renamed");

        assert!(matches!(
            store.update_subject(Subject::new("X", "T1")),
            Err(TimetableError::SubjectNotFound(id)) if id == "X"
        ));
        assert!(matches!(
            store.update_staff(Staff::new("X")),
            Err(TimetableError::StaffNotFound(_))
        ));
    }

    #[test]
    fn test_class_details() {
        let mut store = TimetableStore::new();
        store.update_class_details(ClassDetails {
            section: "B".into(),
            ..Default::default()
        });
        assert_eq!(store.settings().class_details.section, "B");
        assert_eq!(store.settings().periods_per_day(), 7);
    }

    #[test]
    fn test_generate_requires_catalogue() {
        let mut rng = StdRng::seed_from_u64(0);
        let timetabler = Timetabler::new();

        let mut store = TimetableStore::new();
        store.add_staff(Staff::new("T1"));
        assert!(matches!(
            store.generate(&timetabler, StaffCommitments::new(), &mut rng),
            Err(TimetableError::NoSubjects)
        ));

        let mut store = TimetableStore::new();
        store.add_subject(Subject::new("OS", "T1"));
        assert!(matches!(
            store.generate(&timetabler, StaffCommitments::new(), &mut rng),
            Err(TimetableError::NoStaff)
        ));
        assert!(store.timetable().is_empty());
    }

    #[test]
    fn test_generate_saves_timetable() {
        let mut store = loaded_store();
        assert!(store.validate().is_ok());

        let mut rng = StdRng::seed_from_u64(8);
        let generated = store
            .generate(&Timetabler::new(), StaffCommitments::new(), &mut rng)
            .unwrap()
            .clone();
        assert_eq!(generated.len(), 54);
        assert_eq!(store.timetable(), &generated);
        assert_eq!(store.timetable().free_slot_count(), 0);
    }

    #[test]
    fn test_second_class_avoids_shared_staff() {
        let mut first = loaded_store();
        let mut rng = StdRng::seed_from_u64(21);
        let timetabler = Timetabler::new();
        first
            .generate(&timetabler, StaffCommitments::new(), &mut rng)
            .unwrap();

        // A lighter second class sharing T1
        let mut second = TimetableStore::new();
        second.add_staff(Staff::new("T1"));
        second.add_subject(Subject::new("PAS-B", "T1").with_periods_per_week(5));
        let commitments = StaffCommitments::from_slots(&first.timetable().slots);
        let t = second
            .generate(&timetabler, commitments.clone(), &mut rng)
            .unwrap();

        assert_eq!(t.periods_for_subject("PAS-B"), 5);
        assert!(t.staff_conflicts(&commitments).is_empty());
    }

    #[test]
    fn test_reset_and_manual_edit() {
        let mut store = loaded_store();
        assert_eq!(store.reset_timetable().free_slot_count(), 42);

        store.update_slot(TimeSlot::teaching(Weekday::Monday, 1).with_assignment("OS", "T2"));
        let slot = store.timetable().slot_at(Weekday::Monday, 1).unwrap();
        assert_eq!(slot.subject_id.as_deref(), Some("OS"));
        assert_eq!(store.timetable().len(), 54);
    }

    #[test]
    fn test_validate_reports_unknown_staff() {
        let mut store = TimetableStore::new();
        store.add_staff(Staff::new("T1"));
        store.add_subject(Subject::new("OS", "T7"));
        let errors = store.validate().unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidStaffReference);
    }

    #[test]
    fn test_with_settings() {
        let store = TimetableStore::with_settings(ScheduleConfiguration::with_periods(4));
        assert_eq!(store.settings().periods_per_day(), 4);
        assert_eq!(store.request().settings.periods_per_day(), 4);
    }
}
