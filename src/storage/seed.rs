//! Built-in sample dataset for fresh installs.
//!
//! When no saved data exists, the store seeds this snapshot and persists it
//! immediately so the app never starts empty. The content is demonstration
//! data, not a contract; ids are fresh v4 UUIDs on every seeding.

use uuid::Uuid;

use crate::types::category::Category;
use crate::types::link::{now_millis, Link};
use crate::types::snapshot::Snapshot;

const HOUR_MS: i64 = 1000 * 60 * 60;
const DAY_MS: i64 = HOUR_MS * 24;

fn category(name: &str) -> Category {
    Category {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        icon_res_id: None,
        link_count: 0,
    }
}

/// Builds the fixed sample dataset: a few categories and demonstration links.
pub fn sample_snapshot() -> Snapshot {
    let now = now_millis();

    let design = category("Design Inspiration");
    let work = category("Work");
    let read_later = category("Read Later");
    let tech = category("Tech Trends");

    let links = vec![
        Link {
            id: Uuid::new_v4().to_string(),
            url: "https://www.medium.com/design-trends-2024".to_string(),
            title: Some("10 Best UI Design Trends for 2024".to_string()),
            description: Some("A comprehensive guide to the latest shifts in...".to_string()),
            image_url: Some("https://i.ibb.co/1n4Y01R/screen.png".to_string()),
            category_id: Some(design.id.clone()),
            is_favorite: false,
            is_read: false,
            timestamp: now - 2 * HOUR_MS,
        },
        Link {
            id: Uuid::new_v4().to_string(),
            url: "https://www.instagram.com/p/cat-video".to_string(),
            title: Some("Funny Cat Video Compilation 2024 🐱".to_string()),
            description: Some("Shared by Alex".to_string()),
            image_url: Some("https://i.ibb.co/L5w20R0/screen2.png".to_string()),
            category_id: None,
            is_favorite: false,
            is_read: false,
            timestamp: now - DAY_MS,
        },
        Link {
            id: Uuid::new_v4().to_string(),
            url: "https://reactnative.dev/docs".to_string(),
            title: Some("React Native Documentation".to_string()),
            description: Some("Core components and APIs...".to_string()),
            image_url: Some("https://i.ibb.co/M9q0mP5/screen3.png".to_string()),
            category_id: Some(work.id.clone()),
            is_favorite: true,
            is_read: true,
            timestamp: now - 5 * DAY_MS,
        },
    ];

    Snapshot {
        links,
        categories: vec![design, work, read_later, tech],
    }
}
