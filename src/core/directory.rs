//! User directory
//!
//! Read-only list of users the session store authenticates against. The
//! directory is seeded from compiled-in mock records.

use crate::core::models::{Admin, Alumni, Education, Profile, Student, User, UserId};
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

static MOCK_USERS: Lazy<Vec<User>> = Lazy::new(mock_users);

/// Static set of users looked up by credentials or id
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

/// One row of the student leaderboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: usize,
    pub id: UserId,
    pub name: String,
    pub department: String,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Directory populated with the built-in mock users
    pub fn with_mock_users() -> Self {
        Self::new(MOCK_USERS.clone())
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Exact match on the email address
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        debug!("Looking up user by email: {}", email);
        self.users.iter().find(|u| u.email() == email)
    }

    pub fn find_by_id(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == id)
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.users.iter().filter_map(User::as_student)
    }

    pub fn alumni(&self) -> impl Iterator<Item = &Alumni> {
        self.users.iter().filter_map(User::as_alumni)
    }

    /// Students ordered by points, highest first; ties broken by name
    pub fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut students: Vec<&Student> = self.students().collect();
        students.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| a.profile.name.cmp(&b.profile.name))
        });

        students
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, student)| LeaderboardEntry {
                rank: index + 1,
                id: student.profile.id.clone(),
                name: student.profile.name.clone(),
                department: student.department.clone(),
                points: student.points,
                profile_picture: student.profile.profile_picture.clone(),
            })
            .collect()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::with_mock_users()
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn profile(id: &str, name: &str, email: &str, avatar: u8, created_at: DateTime<Utc>) -> Profile {
    Profile {
        id: UserId::from(id),
        name: name.to_string(),
        email: email.to_string(),
        profile_picture: Some(format!("https://i.pravatar.cc/150?img={}", avatar)),
        created_at,
    }
}

fn student(
    profile: Profile,
    registration_id: &str,
    department: &str,
    year: u8,
    points: u32,
) -> User {
    User::Student(Student {
        profile,
        registration_id: registration_id.to_string(),
        department: department.to_string(),
        year,
        points,
        events_attended: Vec::new(),
    })
}

fn mock_users() -> Vec<User> {
    use crate::core::models::EventId;

    let mut john = student(
        profile("1", "John Student", "john@student.edu", 1, date(2022, 9, 1)),
        "ST12345",
        "Computer Science",
        3,
        120,
    );
    if let User::Student(s) = &mut john {
        s.events_attended = vec![EventId(1), EventId(2), EventId(3)];
    }

    vec![
        john,
        User::Alumni(Alumni {
            profile: profile("2", "Jane Alumni", "jane@alumni.edu", 5, date(2020, 5, 15)),
            graduation_year: 2020,
            current_position: Some("Software Engineer".to_string()),
            company: Some("Google".to_string()),
            industry: Some("Technology".to_string()),
            education: vec![
                Education {
                    degree: "Bachelor of Science in Computer Science".to_string(),
                    institution: "University of Technology".to_string(),
                    year: 2020,
                },
                Education {
                    degree: "Master of Business Administration".to_string(),
                    institution: "Business School".to_string(),
                    year: 2022,
                },
            ],
            achievements: vec![
                "Google Certification in Machine Learning".to_string(),
                "Published research paper in AI Conference 2021".to_string(),
                "Startup Weekend Winner 2020".to_string(),
            ],
        }),
        User::Admin(Admin {
            profile: profile("3", "Admin User", "admin@university.edu", 8, date(2019, 1, 10)),
            department: "Administration".to_string(),
            position: "Program Coordinator".to_string(),
        }),
        student(
            profile("4", "Sarah Williams", "sarah@student.edu", 4, date(2023, 9, 1)),
            "ST12346",
            "Computer Science",
            2,
            320,
        ),
        student(
            profile("5", "Emily Johnson", "emily@student.edu", 5, date(2023, 9, 1)),
            "ST12347",
            "Electrical Engineering",
            2,
            380,
        ),
        student(
            profile("7", "David Brown", "david@student.edu", 7, date(2022, 9, 1)),
            "ST12348",
            "Civil Engineering",
            3,
            290,
        ),
        student(
            profile("9", "Michael Chen", "michael@student.edu", 9, date(2021, 9, 1)),
            "ST12349",
            "Mechanical Engineering",
            4,
            350,
        ),
    ]
}
