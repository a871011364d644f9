//! Member activity entities (query row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::member_activity::{
    ActivitySummary, CreatedActivity, FavoriteActivity, RegisteredActivity,
};

/// Row returned by the registered activities query.
#[derive(Debug, Clone, FromRow)]
pub struct RegisteredActivityEntity {
    pub al_id: i32,
    pub activity_name: String,
    pub activity_time: DateTime<Utc>,
    pub introduction: Option<String>,
    pub avatar: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub payment: i32,
    pub need_num: i32,
    pub founder_name: String,
    pub registered_people: i64,
    pub sport_name: String,
    pub court_name: String,
}

/// Row returned by the created activities query.
#[derive(Debug, Clone, FromRow)]
pub struct CreatedActivityEntity {
    pub al_id: i32,
    pub activity_name: String,
    pub activity_time: DateTime<Utc>,
    pub introduction: Option<String>,
    pub avatar: Option<String>,
    pub avatar2: Option<String>,
    pub avatar3: Option<String>,
    pub avatar4: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub payment: i32,
    pub need_num: i32,
    pub area_id: i32,
    pub court_id: i32,
    pub sport_type_id: i32,
    pub registered_people: i64,
    pub sport_name: String,
    pub court_name: String,
    pub is_favorite: bool,
}

/// Row returned by the favorite activities query.
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteActivityEntity {
    pub al_id: i32,
    pub activity_name: String,
    pub activity_time: DateTime<Utc>,
    pub introduction: Option<String>,
    pub avatar: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub payment: i32,
    pub need_num: i32,
    pub founder_name: String,
    pub registered_people: i64,
    pub sport_name: String,
    pub court_name: String,
}

impl From<RegisteredActivityEntity> for RegisteredActivity {
    fn from(entity: RegisteredActivityEntity) -> Self {
        Self {
            summary: ActivitySummary {
                al_id: entity.al_id,
                activity_name: entity.activity_name,
                activity_time: entity.activity_time,
                introduction: entity.introduction,
                avatar: entity.avatar,
                deadline: entity.deadline,
                payment: entity.payment,
                need_num: entity.need_num,
                registered_people: entity.registered_people,
                sport_name: entity.sport_name,
                court_name: entity.court_name,
            },
            founder_name: entity.founder_name,
        }
    }
}

impl From<CreatedActivityEntity> for CreatedActivity {
    fn from(entity: CreatedActivityEntity) -> Self {
        Self {
            summary: ActivitySummary {
                al_id: entity.al_id,
                activity_name: entity.activity_name,
                activity_time: entity.activity_time,
                introduction: entity.introduction,
                avatar: entity.avatar,
                deadline: entity.deadline,
                payment: entity.payment,
                need_num: entity.need_num,
                registered_people: entity.registered_people,
                sport_name: entity.sport_name,
                court_name: entity.court_name,
            },
            avatar2: entity.avatar2,
            avatar3: entity.avatar3,
            avatar4: entity.avatar4,
            area_id: entity.area_id,
            court_id: entity.court_id,
            sport_type_id: entity.sport_type_id,
            is_favorite: entity.is_favorite,
        }
    }
}

impl From<FavoriteActivityEntity> for FavoriteActivity {
    fn from(entity: FavoriteActivityEntity) -> Self {
        Self {
            summary: ActivitySummary {
                al_id: entity.al_id,
                activity_name: entity.activity_name,
                activity_time: entity.activity_time,
                introduction: entity.introduction,
                avatar: entity.avatar,
                deadline: entity.deadline,
                payment: entity.payment,
                need_num: entity.need_num,
                registered_people: entity.registered_people,
                sport_name: entity.sport_name,
                court_name: entity.court_name,
            },
            founder_name: entity.founder_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_created_entity() -> CreatedActivityEntity {
        CreatedActivityEntity {
            al_id: 12,
            activity_name: "Morning Run".to_string(),
            activity_time: Utc.with_ymd_and_hms(2024, 9, 1, 22, 0, 0).unwrap(),
            introduction: Some("5k loop".to_string()),
            avatar: Some("a1.png".to_string()),
            avatar2: Some("a2.png".to_string()),
            avatar3: None,
            avatar4: Some("a4.png".to_string()),
            deadline: None,
            payment: 0,
            need_num: 20,
            area_id: 3,
            court_id: 5,
            sport_type_id: 2,
            registered_people: 0,
            sport_name: "Running".to_string(),
            court_name: "City Park".to_string(),
            is_favorite: true,
        }
    }

    #[test]
    fn test_created_entity_to_domain() {
        let entity = create_test_created_entity();
        let created: CreatedActivity = entity.clone().into();

        assert_eq!(created.summary.al_id, entity.al_id);
        assert_eq!(created.summary.activity_time, entity.activity_time);
        assert_eq!(created.summary.registered_people, 0);
        assert_eq!(created.avatar2, entity.avatar2);
        assert!(created.avatar3.is_none());
        assert_eq!(created.avatar4, entity.avatar4);
        assert_eq!(created.court_id, 5);
        assert!(created.is_favorite);
    }

    #[test]
    fn test_registered_entity_to_domain() {
        let entity = RegisteredActivityEntity {
            al_id: 5,
            activity_name: "Friday Futsal".to_string(),
            activity_time: Utc.with_ymd_and_hms(2024, 9, 6, 11, 30, 0).unwrap(),
            introduction: None,
            avatar: None,
            deadline: Some(Utc.with_ymd_and_hms(2024, 9, 5, 11, 30, 0).unwrap()),
            payment: 200,
            need_num: 10,
            founder_name: "Carol".to_string(),
            registered_people: 5,
            sport_name: "Futsal".to_string(),
            court_name: "Gym B".to_string(),
        };

        let registered: RegisteredActivity = entity.into();
        assert_eq!(registered.founder_name, "Carol");
        assert_eq!(registered.summary.registered_people, 5);
        assert!(registered.summary.deadline.is_some());
    }

    #[test]
    fn test_favorite_entity_to_domain() {
        let entity = FavoriteActivityEntity {
            al_id: 8,
            activity_name: "Climbing Night".to_string(),
            activity_time: Utc.with_ymd_and_hms(2024, 10, 2, 12, 0, 0).unwrap(),
            introduction: Some("Bouldering".to_string()),
            avatar: Some("wall.jpg".to_string()),
            deadline: None,
            payment: 350,
            need_num: 6,
            founder_name: "Dan".to_string(),
            registered_people: 2,
            sport_name: "Climbing".to_string(),
            court_name: "Rock Gym".to_string(),
        };

        let favorite: FavoriteActivity = entity.into();
        assert_eq!(favorite.summary.sport_name, "Climbing");
        assert_eq!(favorite.founder_name, "Dan");
    }
}
