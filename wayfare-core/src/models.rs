use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Server-side record behind a session cookie token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
}

/// A point of interest within a city, with its associated hotels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotspot {
    pub name: String,
    pub image: String,
    pub description: String,
    pub hotels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: Uuid,
    pub city_name: String,
    pub hotspots: Vec<Hotspot>,
}

/// A user-owned travel reservation. `details` is an opaque payload beyond
/// the `type` tag; the API layer caps its size before it gets here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub owner_email: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub details: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// One-leg flight search forwarded to the external provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub passengers: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_omits_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("a@x.com"));
        assert!(!json.contains("secret"));
    }

    #[test]
    fn booking_serializes_kind_as_type() {
        let booking = Booking {
            id: Uuid::new_v4(),
            owner_email: "a@x.com".to_string(),
            kind: "hotel".to_string(),
            details: serde_json::json!({"nights": 2}),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["type"], "hotel");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn city_roundtrips_through_json() {
        let raw = serde_json::json!({
            "id": Uuid::new_v4(),
            "city_name": "Paris",
            "hotspots": [{
                "name": "Eiffel Tower",
                "image": "eiffel.jpg",
                "description": "Iron lattice tower on the Champ de Mars",
                "hotels": ["Hotel Le Walt", "Pullman Paris"]
            }]
        });

        let city: City = serde_json::from_value(raw).unwrap();
        assert_eq!(city.city_name, "Paris");
        assert_eq!(city.hotspots[0].hotels.len(), 2);
    }
}
