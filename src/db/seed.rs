//! Fixture records written on first run: one admin, eight workers, six
//! employers and five jobs around Jaipur localities.

use crate::domain::{MILLIS_PER_DAY, MILLIS_PER_HOUR, Timestamp};
use crate::models::user::{ADMIN_ID, ADMIN_PHONE};
use crate::models::{
    Account, AdminProfile, EmployerProfile, JobPost, JobStatus, RatingTally, Skill, User,
    WorkerProfile, WorkerStatus,
};

struct SeedWorker {
    id: &'static str,
    name: &'static str,
    phone: &'static str,
    photo: &'static str,
    skills: &'static [&'static str],
    area: &'static str,
    wage: u32,
    experience: u32,
    available: bool,
    last_update_offset: i64,
    rating: (u32, u32),
    bio: &'static str,
}

const WORKERS: [SeedWorker; 8] = [
    SeedWorker {
        id: "w1",
        name: "Raju \"Painter\" Singh",
        phone: "9800011101",
        photo: "photo-1586769852836-bc069f19e1b6",
        skills: &["Painter", "Cleaner"],
        area: "Vaishali Nagar",
        wage: 600,
        experience: 8,
        available: true,
        last_update_offset: 0,
        rating: (23, 5),
        bio: "Expert in wall painting and texture design. 8 years experience.",
    },
    SeedWorker {
        id: "w2",
        name: "Mohammad Imran",
        phone: "9800011102",
        photo: "photo-1566492031773-4f4e44671857",
        skills: &["Electrician"],
        area: "Raja Park",
        wage: 800,
        experience: 12,
        available: true,
        last_update_offset: 0,
        rating: (48, 10),
        bio: "House wiring, fault repair, and AC installation specialist.",
    },
    SeedWorker {
        id: "w3",
        name: "Sunita Devi",
        phone: "9800011103",
        photo: "photo-1664304598096-7d0d0f55bd44",
        skills: &["Helper", "Cleaner"],
        area: "Malviya Nagar",
        wage: 450,
        experience: 4,
        available: true,
        last_update_offset: 0,
        rating: (19, 4),
        bio: "Hardworking helper for construction and home cleaning.",
    },
    SeedWorker {
        id: "w4",
        name: "Vikram Mistry",
        phone: "9800011104",
        photo: "photo-1542909168-82c3e7fdca5c",
        skills: &["Mason", "Tile Worker"],
        area: "Jhotwara",
        wage: 900,
        experience: 15,
        available: false,
        last_update_offset: MILLIS_PER_DAY,
        rating: (40, 8),
        bio: "Master mason for plaster, brickwork and marble fitting.",
    },
    SeedWorker {
        id: "w5",
        name: "Chotu Kumar",
        phone: "9800011105",
        photo: "photo-1633332755192-727a05c4013d",
        skills: &["Loading Worker", "Helper"],
        area: "Sodala",
        wage: 500,
        experience: 2,
        available: true,
        last_update_offset: 0,
        rating: (12, 3),
        bio: "Strong and energetic worker for loading/unloading.",
    },
    SeedWorker {
        id: "w6",
        name: "Harish Plumber",
        phone: "9800011106",
        photo: "photo-1472099645785-5658abf4ff4e",
        skills: &["Plumber"],
        area: "Mansarovar",
        wage: 750,
        experience: 9,
        available: true,
        last_update_offset: 0,
        rating: (35, 7),
        bio: "Pipe fitting, tank installation and leakage repair.",
    },
    SeedWorker {
        id: "w7",
        name: "Lakhan Carpenter",
        phone: "9800011107",
        photo: "photo-1507003211169-0a1dd7228f2d",
        skills: &["Carpenter"],
        area: "Civil Lines",
        wage: 850,
        experience: 10,
        available: false,
        last_update_offset: 40_000,
        rating: (50, 10),
        bio: "Furniture making and repair works.",
    },
    SeedWorker {
        id: "w8",
        name: "Bablu Welder",
        phone: "9800011108",
        photo: "photo-1500648767791-00dcc994a43e",
        skills: &["Welder"],
        area: "Sanganer",
        wage: 1000,
        experience: 12,
        available: true,
        last_update_offset: 0,
        rating: (15, 3),
        bio: "Iron gate and grill fabrication specialist.",
    },
];

struct SeedEmployer {
    id: &'static str,
    name: &'static str,
    phone: &'static str,
    area: &'static str,
    rating: (u32, u32),
    bio: &'static str,
}

const EMPLOYERS: [SeedEmployer; 6] = [
    SeedEmployer {
        id: "e1",
        name: "Gupta Ji Contractor",
        phone: "9900022201",
        area: "Vaishali Nagar",
        rating: (15, 3),
        bio: "Civil contractor looking for reliable labour.",
    },
    SeedEmployer {
        id: "e2",
        name: "Mrs. Sharma",
        phone: "9900022202",
        area: "Malviya Nagar",
        rating: (5, 1),
        bio: "Home owner.",
    },
    SeedEmployer {
        id: "e3",
        name: "Jaipur Constructions",
        phone: "9900022203",
        area: "Mansarovar",
        rating: (20, 5),
        bio: "Building construction company.",
    },
    SeedEmployer {
        id: "e4",
        name: "Rahul Sweet Shop",
        phone: "9900022204",
        area: "Raja Park",
        rating: (8, 2),
        bio: "Shop owner.",
    },
    SeedEmployer {
        id: "e5",
        name: "Amit Homeowner",
        phone: "9900022205",
        area: "Civil Lines",
        rating: (0, 0),
        bio: "",
    },
    SeedEmployer {
        id: "e6",
        name: "City Hardware Store",
        phone: "9900022206",
        area: "Jhotwara",
        rating: (4, 1),
        bio: "Hardware supplier.",
    },
];

struct SeedJob {
    id: &'static str,
    employer_id: &'static str,
    employer_name: &'static str,
    job_type: &'static str,
    area: &'static str,
    workers_needed: u32,
    payment: u32,
    date_needed: &'static str,
    description: &'static str,
    age: i64,
}

const JOBS: [SeedJob; 5] = [
    SeedJob {
        id: "j1",
        employer_id: "e1",
        employer_name: "Gupta Ji Contractor",
        job_type: "Mason",
        area: "Vaishali Nagar",
        workers_needed: 3,
        payment: 850,
        date_needed: "Today",
        description: "Urgent slab casting work. Lunch provided.",
        age: MILLIS_PER_HOUR,
    },
    SeedJob {
        id: "j2",
        employer_id: "e2",
        employer_name: "Mrs. Sharma",
        job_type: "Cleaner",
        area: "Malviya Nagar",
        workers_needed: 1,
        payment: 400,
        date_needed: "Tomorrow",
        description: "Deep cleaning of 2BHK flat.",
        age: 2 * MILLIS_PER_HOUR,
    },
    SeedJob {
        id: "j3",
        employer_id: "e3",
        employer_name: "Jaipur Constructions",
        job_type: "Helper",
        area: "Mansarovar",
        workers_needed: 10,
        payment: 500,
        date_needed: "2023-11-01",
        description: "Construction site helpers needed for 1 week.",
        age: MILLIS_PER_DAY,
    },
    SeedJob {
        id: "j4",
        employer_id: "e4",
        employer_name: "Rahul Sweet Shop",
        job_type: "Painter",
        area: "Raja Park",
        workers_needed: 2,
        payment: 600,
        date_needed: "This Weekend",
        description: "Shop shutter painting.",
        age: 10_000_000,
    },
    SeedJob {
        id: "j5",
        employer_id: "e6",
        employer_name: "City Hardware",
        job_type: "Loading Worker",
        area: "Jhotwara",
        workers_needed: 4,
        payment: 550,
        date_needed: "Today",
        description: "Unloading ceramic tiles truck.",
        age: MILLIS_PER_HOUR / 2,
    },
];

fn account(
    id: &str,
    name: &str,
    phone: &str,
    now: Timestamp,
    password: Option<&str>,
    bio: &str,
) -> Account {
    Account {
        id: id.to_string(),
        phone: phone.to_string(),
        name: name.to_string(),
        created_at: now,
        password: password.map(str::to_string),
        bio: (!bio.is_empty()).then(|| bio.to_string()),
    }
}

#[must_use]
pub fn users(now: Timestamp) -> Vec<User> {
    let admin = User::Admin(AdminProfile {
        account: account(
            ADMIN_ID,
            "Chowk Manager",
            ADMIN_PHONE,
            now,
            Some("admin"),
            "System Administrator",
        ),
    });

    let workers = WORKERS.iter().map(|w| {
        User::Worker(WorkerProfile {
            account: account(w.id, w.name, w.phone, now, Some("123"), w.bio),
            photo_url: format!(
                "https://images.unsplash.com/{}?auto=format&fit=crop&q=80&w=200&h=200",
                w.photo
            ),
            id_proof_url: None,
            skills: w.skills.iter().copied().map(Skill::from).collect(),
            area: w.area.to_string(),
            daily_wage: w.wage,
            experience_years: w.experience,
            is_available_today: w.available,
            last_available_update: now - w.last_update_offset,
            status: WorkerStatus::Approved,
            rejection_reason: None,
            rating: RatingTally::new(w.rating.0, w.rating.1),
        })
    });

    let employers = EMPLOYERS.iter().map(|e| {
        User::Employer(EmployerProfile {
            account: account(e.id, e.name, e.phone, now, None, e.bio),
            area: e.area.to_string(),
            rating: RatingTally::new(e.rating.0, e.rating.1),
        })
    });

    std::iter::once(admin).chain(workers).chain(employers).collect()
}

#[must_use]
pub fn jobs(now: Timestamp) -> Vec<JobPost> {
    JOBS.iter()
        .map(|j| JobPost {
            id: j.id.to_string(),
            employer_id: j.employer_id.to_string(),
            employer_name: j.employer_name.to_string(),
            job_type: Skill::from(j.job_type),
            area: j.area.to_string(),
            workers_needed: j.workers_needed,
            payment: j.payment,
            date_needed: j.date_needed.to_string(),
            description: Some(j.description.to_string()),
            created_at: now - j.age,
            status: JobStatus::Active,
        })
        .collect()
}
