use chrono::Utc;
use uuid::Uuid;

use crate::models::delivery::{DeliveryStop, StopStatus, UpcomingTrip, UpcomingTripStatus};
use crate::models::driver::{Driver, DriverLevel};
use crate::models::learning::{ChecklistTemplate, LearningVideo};
use crate::models::rewards::{Badge, Voucher};
use crate::models::wellness::NearbyPlace;
use crate::state::AppState;

/// Fixed demo dataset loaded on startup. Drivers get deterministic ids
/// (`Uuid::from_u128(1..=5)`) so the mobile client and tests can address them
/// across restarts; catalog entries get fresh ids.
pub fn load_demo_data(state: &AppState) {
    seed_drivers(state);
    seed_badges(state);
    seed_vouchers(state);
    seed_nearby_places(state);
    seed_upcoming_trips(state);
    seed_learning_videos(state);
    seed_checklist_templates(state);

    tracing::info!(
        drivers = state.drivers.len(),
        badges = state.badges.len(),
        vouchers = state.vouchers.len(),
        nearby_places = state.nearby_places.len(),
        upcoming_trips = state.upcoming_trips.len(),
        learning_videos = state.learning_videos.len(),
        "demo data seeded"
    );
}

fn seed_drivers(state: &AppState) {
    let rows: [(u128, &str, &str, DriverLevel, u32, u32, u32); 5] = [
        (1, "+919876543210", "Prakhar Raghuvansh", DriverLevel::ProDriver, 2450, 12, 145),
        (2, "+918989522157", "Sujit Soni", DriverLevel::FleetLegend, 3450, 25, 230),
        (3, "+919876543212", "Shubham Agarwal", DriverLevel::ProDriver, 3200, 18, 210),
        (4, "+919876543213", "Sumandeep Singh", DriverLevel::ProDriver, 2980, 15, 195),
        (5, "+919876543214", "Saurabh Ginde", DriverLevel::Rookie, 2750, 10, 175),
    ];

    for (seed, phone, name, level, points, streak, trips) in rows {
        let driver = Driver {
            id: Uuid::from_u128(seed),
            phone_number: phone.to_string(),
            name: name.to_string(),
            level,
            total_points: points,
            current_streak: streak,
            total_trips: trips,
            created_at: Utc::now(),
        };
        state
            .drivers_by_phone
            .insert(driver.phone_number.clone(), driver.id);
        state.drivers.insert(driver.id, driver);
    }
}

fn seed_badges(state: &AppState) {
    let rows = [
        ("Safety Star", "Zero harsh braking in a trip", "shield", 20, "no_harsh_braking"),
        ("On-Time Hero", "Delivered on time", "clock", 50, "on_time_delivery"),
        ("Eco Driver", "Excellent fuel efficiency", "leaf", 20, "fuel_efficient"),
        ("Gold Driver", "7-day safe driving streak", "trophy", 100, "7_day_streak"),
        ("Fleet Legend", "Top 10 weekly ranking", "crown", 200, "top_10_weekly"),
        ("Contributor", "Active in community", "users", 10, "community_contribution"),
    ];

    for (name, description, icon, point_value, criteria) in rows {
        let badge = Badge {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            point_value,
            criteria: criteria.to_string(),
        };
        state.badges.insert(badge.id, badge);
    }
}

fn seed_vouchers(state: &AppState) {
    let rows = [
        ("Rs 500 Fuel Voucher", "Valid at all HP pumps", 500, "fuel", 500.0),
        ("Rs 300 Food Voucher", "Use at partner dhabas", 300, "food", 300.0),
        ("Rs 200 Recharge", "Mobile recharge", 200, "recharge", 200.0),
        ("Rs 1000 Fuel Voucher", "Valid at all HP pumps", 1000, "fuel", 1000.0),
    ];

    for (name, description, point_cost, category, value) in rows {
        let voucher = Voucher {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            point_cost,
            category: category.to_string(),
            value,
        };
        state.vouchers.insert(voucher.id, voucher);
    }
}

fn seed_nearby_places(state: &AppState) {
    let rows: [(&str, &str, f64, f64, &str, bool, Option<u32>); 8] = [
        ("Highway Dhaba", "dhaba", 19.0760, 72.8777, "NH-48, Mumbai", true, Some(10)),
        ("Punjabi Tadka Dhaba", "dhaba", 19.1200, 72.9100, "NH-48, Thane", true, Some(15)),
        ("Rajdhani Pure Veg", "dhaba", 19.1500, 72.9500, "NH-48, Kalyan", true, Some(20)),
        ("HP Petrol Pump", "fuel", 19.0850, 72.8950, "Western Express Highway", true, Some(5)),
        ("Indian Oil Pump", "fuel", 19.1100, 72.9200, "NH-48, Thane East", true, None),
        ("24x7 Truck Service", "mechanic", 19.1300, 72.9300, "Thane-Belapur Road", true, Some(15)),
        ("Truck Parking Zone A", "parking", 19.0900, 72.9000, "Logistics Hub, Mumbai", true, None),
        ("Safe Park Truck Zone", "parking", 19.1400, 72.9400, "Industrial Estate, Thane", true, None),
    ];

    for (name, category, latitude, longitude, address, has_truck_parking, discount) in rows {
        let place = NearbyPlace {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            latitude,
            longitude,
            address: address.to_string(),
            has_truck_parking,
            is_open: true,
            discount,
        };
        state.nearby_places.insert(place.id, place);
    }
}

fn seed_upcoming_trips(state: &AppState) {
    let stops = [
        ("Bhiwandi Warehouse", "Mahesh Patil", "+919822001001"),
        ("Nashik Distribution Center", "Anita Deshmukh", "+919822001002"),
        ("Dhule Retail Hub", "Vikram Chavan", "+919822001003"),
    ];

    let trip = UpcomingTrip {
        id: Uuid::from_u128(101),
        driver_id: Uuid::from_u128(1),
        origin: "Mumbai".to_string(),
        destination: "Dhule".to_string(),
        scheduled_at: Utc::now(),
        status: UpcomingTripStatus::Upcoming,
        current_stop_index: 0,
        stops: stops
            .iter()
            .enumerate()
            .map(|(i, (location, contact_name, contact_phone))| DeliveryStop {
                sequence: i as u32 + 1,
                location: location.to_string(),
                contact_name: contact_name.to_string(),
                contact_phone: contact_phone.to_string(),
                instructions: None,
                status: StopStatus::Pending,
                completed_at: None,
            })
            .collect(),
    };
    state.upcoming_trips.insert(trip.id, trip);
}

fn seed_learning_videos(state: &AppState) {
    let rows: [(u128, &str, &str, &str, u32, u32, &str); 4] = [
        (201, "Tyre Safety Check", "Spot wear and pressure issues before they strand you", "maintenance", 5, 10, "wrench"),
        (202, "Emergency Handling", "What to do after a breakdown or accident on the highway", "safety", 8, 15, "alert-triangle"),
        (203, "Fuel-Smart Driving", "Throttle and gear habits that cut diesel burn", "efficiency", 6, 10, "fuel"),
        (204, "Night Driving Basics", "Staying alert and visible after dark", "safety", 7, 15, "moon"),
    ];

    for (seed, title, description, category, duration, reward, icon) in rows {
        let video = LearningVideo {
            id: Uuid::from_u128(seed),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            duration_minutes: duration,
            points_reward: reward,
            icon: icon.to_string(),
        };
        state.learning_videos.insert(video.id, video);
    }
}

fn seed_checklist_templates(state: &AppState) {
    let rows: [(u128, &str, &str, &[&str]); 2] = [
        (301, "Pre-Trip Inspection", "pre_trip", &[
            "Check tyre pressure and tread",
            "Test brakes and lights",
            "Verify fuel and coolant levels",
            "Secure cargo and close doors",
        ]),
        (302, "Post-Trip Wrap-Up", "post_trip", &[
            "Log odometer reading",
            "Report any vehicle damage",
            "Hand over delivery receipts",
        ]),
    ];

    for (seed, name, checklist_type, items) in rows {
        let template = ChecklistTemplate {
            id: Uuid::from_u128(seed),
            name: name.to_string(),
            checklist_type: checklist_type.to_string(),
            items: items.iter().map(|item| item.to_string()).collect(),
        };
        state.checklist_templates.insert(template.id, template);
    }
}
