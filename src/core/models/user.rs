//! User records
//!
//! A user is one of three roles. Each role carries its own extended fields on
//! top of a shared [`Profile`], so the role tag and the fields it implies can
//! never disagree.

use super::{EventId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields shared by every role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// User id
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address (unique, used for login)
    pub email: String,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

/// Directory user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum User {
    Student(Student),
    Alumni(Alumni),
    Admin(Admin),
}

/// Currently enrolled student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    pub profile: Profile,
    /// University registration number
    pub registration_id: String,
    pub department: String,
    /// Year of study
    pub year: u8,
    /// Engagement points earned so far
    pub points: u32,
    /// Events the student has attended
    #[serde(default)]
    pub events_attended: Vec<EventId>,
}

/// Graduate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alumni {
    #[serde(flatten)]
    pub profile: Profile,
    pub graduation_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Degree held by an alumnus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: i32,
}

/// Staff member administering events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(flatten)]
    pub profile: Profile,
    pub department: String,
    pub position: String,
}

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Alumni,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "student"),
            UserRole::Alumni => write!(f, "alumni"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "alumni" => Ok(UserRole::Alumni),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

impl User {
    /// Shared profile fields
    pub fn profile(&self) -> &Profile {
        match self {
            User::Student(student) => &student.profile,
            User::Alumni(alumni) => &alumni.profile,
            User::Admin(admin) => &admin.profile,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.profile().id
    }

    pub fn name(&self) -> &str {
        &self.profile().name
    }

    pub fn email(&self) -> &str {
        &self.profile().email
    }

    pub fn role(&self) -> UserRole {
        match self {
            User::Student(_) => UserRole::Student,
            User::Alumni(_) => UserRole::Alumni,
            User::Admin(_) => UserRole::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, User::Admin(_))
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            User::Student(student) => Some(student),
            _ => None,
        }
    }

    pub fn as_alumni(&self) -> Option<&Alumni> {
        match self {
            User::Alumni(alumni) => Some(alumni),
            _ => None,
        }
    }
}
