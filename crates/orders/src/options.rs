//! Non-priced option sets of the client form.

use cleanops_core::{labelled_enum, DomainError};

fn unknown(what: &'static str) -> impl Fn(String) -> DomainError {
    move |s| DomainError::validation(format!("unknown {what} '{s}'"))
}

labelled_enum! {
    pub enum CleaningFrequency: DomainError = unknown("cleaning frequency");
    {
        OneTime => "One Time",
        Weekly => "Weekly",
        Biweekly => "Biweekly",
        Monthly => "Monthly",
    }
}

labelled_enum! {
    /// Floor area band of the property.
    pub enum SuperficialArea: DomainError = unknown("superficial area");
    {
        From500To1000 => "500-1000 ft²",
        From1000To1500 => "1000-1500 ft²",
        From1500To2000 => "1500-2000 ft²",
        From2000To2500 => "2000-2500 ft²",
        From2500To3000 => "2500-3000 ft²",
        From3000To3500 => "3000-3500 ft²",
        From3500To4000 => "3500-4000 ft²",
        From4000To4500 => "4000-4500 ft²",
        From4500To5000 => "4500-5000 ft²",
    }
}

labelled_enum! {
    pub enum Priority: DomainError = unknown("priority");
    {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
}

labelled_enum! {
    /// Progress of the job itself.
    pub enum JobStatus: DomainError = unknown("status");
    {
        Pending => "Pending",
        InProgress => "In Progress",
        Completed => "Completed",
    }
}
