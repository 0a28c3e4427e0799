use std::{fs, io::ErrorKind, path::Path};

use anyhow::{Context, Result};

use stayhub_boundary as json;
use stayhub_core::{entities as e, repositories::*};
use stayhub_db_memory::MemoryDb;

/// Loads the JSON snapshot into a fresh in-memory store. A missing file
/// yields an empty store.
pub fn load<P: AsRef<Path>>(path: P) -> Result<MemoryDb> {
    let path = path.as_ref();
    let snapshot: json::Snapshot = match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse snapshot {}", path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!(
                "Snapshot {} not found => starting with an empty store",
                path.display()
            );
            json::Snapshot::default()
        }
        Err(err) => return Err(err.into()),
    };
    let db = MemoryDb::default();
    restore(&db, snapshot)?;
    Ok(db)
}

/// Creates every snapshot record in the store. Returns the number of
/// created records.
pub fn restore(db: &MemoryDb, snapshot: json::Snapshot) -> Result<usize> {
    let json::Snapshot {
        users,
        listings,
        bookings,
        reviews,
    } = snapshot;
    let mut count = 0;
    for user in users {
        db.create_user(&user.into())?;
        count += 1;
    }
    for listing in listings {
        db.create_listing(&listing.into())?;
        count += 1;
    }
    for booking in bookings {
        db.create_booking(&e::Booking::try_from(booking)?)?;
        count += 1;
    }
    for review in reviews {
        db.create_review(&review.into())?;
        count += 1;
    }
    Ok(count)
}

pub fn dump(db: &MemoryDb) -> Result<json::Snapshot> {
    Ok(json::Snapshot {
        users: db.all_users()?.into_iter().map(Into::into).collect(),
        listings: db.all_listings()?.into_iter().map(Into::into).collect(),
        bookings: db.all_bookings()?.into_iter().map(Into::into).collect(),
        reviews: db.all_reviews()?.into_iter().map(Into::into).collect(),
    })
}

pub fn save<P: AsRef<Path>>(db: &MemoryDb, path: P) -> Result<()> {
    let snapshot = dump(db)?;
    let contents = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, contents)?;
    Ok(())
}
