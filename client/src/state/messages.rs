//! User-facing outcome strings, derived from a resource's labels.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

pub fn created(label: &str) -> String {
    format!("{label} created successfully!")
}

pub fn updated(label: &str) -> String {
    format!("{label} updated successfully!")
}

pub fn deleted(label: &str) -> String {
    format!("{label} deleted successfully!")
}

pub fn create_failed(label: &str) -> String {
    format!("Failed to create the {}. Please check your input.", label.to_lowercase())
}

pub fn update_failed(label: &str) -> String {
    format!("Failed to update the {}.", label.to_lowercase())
}

pub fn delete_failed(label: &str) -> String {
    format!("Unable to delete the {label}!")
}

pub fn fetch_failed(plural: &str) -> String {
    format!("Failed to fetch {}", plural.to_lowercase())
}

pub fn fetching(plural: &str) -> String {
    format!("Fetching {plural}...")
}

pub fn confirm_delete(label: &str) -> String {
    format!("Are you sure you want to delete this {}?", label.to_lowercase())
}
