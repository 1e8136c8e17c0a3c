use serde::{Deserialize, Serialize};

use cleanops_core::{labelled_enum, DomainError, DomainResult, Entity, RecordId};

use crate::schedule::WeeklyAvailability;

/// Worker identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(pub RecordId);

impl WorkerId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl From<RecordId> for WorkerId {
    fn from(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for WorkerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(WorkerId)
    }
}

labelled_enum! {
    /// Whether a worker can currently be booked.
    pub enum WorkerStatus: DomainError = |s: String| DomainError::validation(format!("unknown worker status '{s}'"));
    {
        Active => "Active",
        Suspended => "Suspended",
    }
}

impl WorkerStatus {
    pub fn toggled(self) -> Self {
        match self {
            WorkerStatus::Active => WorkerStatus::Suspended,
            WorkerStatus::Suspended => WorkerStatus::Active,
        }
    }
}

/// Contact details. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkerProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl WorkerProfile {
    pub fn validate(&self) -> DomainResult<()> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!("{field} is required")));
            }
        }
        Ok(())
    }
}

/// Partial update of a worker; `None` leaves a field unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct WorkerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub availability: Option<WeeklyAvailability>,
}

impl WorkerPatch {
    pub fn is_empty(&self) -> bool {
        *self == WorkerPatch::default()
    }
}

/// A member of the cleaning staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    id: WorkerId,
    #[serde(flatten)]
    profile: WorkerProfile,
    availability: WeeklyAvailability,
    status: WorkerStatus,
}

impl Entity for Worker {
    type Id = WorkerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Worker {
    /// Register a new worker. New workers start out active.
    pub fn register(
        id: WorkerId,
        profile: WorkerProfile,
        availability: WeeklyAvailability,
    ) -> DomainResult<Self> {
        profile.validate()?;
        Ok(Self {
            id,
            profile,
            availability,
            status: WorkerStatus::Active,
        })
    }

    pub fn id_typed(&self) -> WorkerId {
        self.id
    }

    pub fn profile(&self) -> &WorkerProfile {
        &self.profile
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn availability(&self) -> &WeeklyAvailability {
        &self.availability
    }

    pub fn status(&self) -> WorkerStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == WorkerStatus::Active
    }

    /// Apply a partial update. The worker is left untouched if the result
    /// would be invalid.
    pub fn update(&mut self, patch: WorkerPatch) -> DomainResult<()> {
        let mut profile = self.profile.clone();
        if let Some(name) = patch.name {
            profile.name = name;
        }
        if let Some(email) = patch.email {
            profile.email = email;
        }
        if let Some(phone) = patch.phone {
            profile.phone = phone;
        }
        if let Some(address) = patch.address {
            profile.address = address;
        }
        profile.validate()?;

        self.profile = profile;
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
        Ok(())
    }

    /// Flip between active and suspended; returns the new status.
    pub fn toggle_status(&mut self) -> WorkerStatus {
        self.status = self.status.toggled();
        self.status
    }
}

/// Stored form of a worker; the id is the record key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerDocument {
    #[serde(flatten)]
    pub profile: WorkerProfile,
    #[serde(default)]
    pub availability: WeeklyAvailability,
    pub status: WorkerStatus,
}

impl WorkerDocument {
    /// A validated, active worker record ready to be stored.
    pub fn register(profile: WorkerProfile, availability: WeeklyAvailability) -> DomainResult<Self> {
        profile.validate()?;
        Ok(Self {
            profile,
            availability,
            status: WorkerStatus::Active,
        })
    }
}

impl From<&Worker> for WorkerDocument {
    fn from(worker: &Worker) -> Self {
        Self {
            profile: worker.profile.clone(),
            availability: worker.availability,
            status: worker.status,
        }
    }
}

impl Worker {
    pub fn from_document(id: WorkerId, doc: WorkerDocument) -> Self {
        Self {
            id,
            profile: doc.profile,
            availability: doc.availability,
            status: doc.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::DayAvailability;
    use cleanops_core::Weekday;

    fn profile() -> WorkerProfile {
        WorkerProfile {
            name: "Marie Tremblay".into(),
            email: "marie@example.com".into(),
            phone: "514-555-0101".into(),
            address: "12 Rue Saint-Denis".into(),
        }
    }

    fn worker() -> Worker {
        Worker::register(
            WorkerId::new(RecordId::new()),
            profile(),
            WeeklyAvailability::default(),
        )
        .unwrap()
    }

    #[test]
    fn registered_workers_start_active() {
        let w = worker();
        assert_eq!(w.status(), WorkerStatus::Active);
        assert!(w.is_active());
    }

    #[test]
    fn every_profile_field_is_required() {
        let mut p = profile();
        p.phone = "   ".into();
        let err = Worker::register(WorkerId::new(RecordId::new()), p, WeeklyAvailability::default())
            .unwrap_err();
        assert_eq!(err, DomainError::validation("phone is required"));
    }

    #[test]
    fn toggle_flips_status_both_ways() {
        let mut w = worker();
        assert_eq!(w.toggle_status(), WorkerStatus::Suspended);
        assert!(!w.is_active());
        assert_eq!(w.toggle_status(), WorkerStatus::Active);
    }

    #[test]
    fn invalid_patch_leaves_worker_untouched() {
        let mut w = worker();
        let before = w.clone();
        let patch = WorkerPatch {
            name: Some(String::new()),
            availability: Some(WeeklyAvailability::uniform(DayAvailability::Off)),
            ..WorkerPatch::default()
        };
        assert!(w.update(patch).is_err());
        assert_eq!(w, before);
    }

    #[test]
    fn patch_updates_profile_and_availability() {
        let mut w = worker();
        let patch = WorkerPatch {
            phone: Some("438-555-0199".into()),
            availability: Some(WeeklyAvailability::default().with(Weekday::Sunday, DayAvailability::Off)),
            ..WorkerPatch::default()
        };
        w.update(patch).unwrap();
        assert_eq!(w.profile().phone, "438-555-0199");
        assert!(w.availability().get(Weekday::Sunday).is_off());
        assert_eq!(w.name(), "Marie Tremblay");
    }

    #[test]
    fn serializes_to_flat_document() {
        let w = worker();
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["name"], "Marie Tremblay");
        assert_eq!(json["status"], "Active");
        assert_eq!(json["availability"]["Friday"]["endTime"], "8:00 PM");

        let back: Worker = serde_json::from_value(json).unwrap();
        assert_eq!(back, w);
    }

    #[test]
    fn document_round_trip_keeps_the_worker() {
        let mut w = worker();
        w.toggle_status();
        let doc = WorkerDocument::from(&w);
        assert_eq!(Worker::from_document(w.id_typed(), doc), w);
    }

    #[test]
    fn document_registration_validates_the_profile() {
        let mut p = profile();
        p.email.clear();
        assert!(WorkerDocument::register(p, WeeklyAvailability::default()).is_err());

        let doc = WorkerDocument::register(profile(), WeeklyAvailability::default()).unwrap();
        assert_eq!(doc.status, WorkerStatus::Active);
    }
}
