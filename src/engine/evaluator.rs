use crate::models::trip::Grade;

pub const BADGE_ON_TIME_HERO: &str = "On-Time Hero";
pub const BADGE_SAFETY_STAR: &str = "Safety Star";
pub const BADGE_ECO_DRIVER: &str = "Eco Driver";

const ON_TIME_BONUS: u32 = 50;
const GOOD_DRIVING_BONUS: u32 = 20;
const NO_HARSH_BRAKING_BONUS: u32 = 20;
const FUEL_EFFICIENCY_BONUS: u32 = 15;

const GRADE_A_THRESHOLD: f64 = 85.0;
const GRADE_B_THRESHOLD: f64 = 70.0;

/// Raw telemetry reported at trip completion.
#[derive(Debug, Clone, Copy)]
pub struct TripTelemetry {
    pub fuel_efficiency: f64,
    pub harsh_braking: u32,
    pub route_adherence: f64,
    pub idle_minutes: u32,
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub avg_score: f64,
    pub grade: Grade,
    pub points_earned: u32,
    pub badges_earned: Vec<String>,
}

/// Maps trip telemetry to a grade, a point award, and badge eligibility.
///
/// The average is deliberately not clamped: a harsh-braking count above 100
/// pushes the safety component negative and drags the grade down to C.
/// Each bonus condition is independent and additive.
pub fn evaluate(telemetry: &TripTelemetry) -> Evaluation {
    let safety = 100.0 - f64::from(telemetry.harsh_braking);
    let avg_score = (telemetry.fuel_efficiency + safety + telemetry.route_adherence) / 3.0;

    let mut points_earned = 0;
    let mut badges_earned = Vec::new();

    if telemetry.route_adherence >= 90.0 {
        points_earned += ON_TIME_BONUS;
        badges_earned.push(BADGE_ON_TIME_HERO.to_string());
    }

    if avg_score >= GRADE_A_THRESHOLD {
        points_earned += GOOD_DRIVING_BONUS;
    }

    if telemetry.harsh_braking == 0 {
        points_earned += NO_HARSH_BRAKING_BONUS;
        badges_earned.push(BADGE_SAFETY_STAR.to_string());
    }

    if telemetry.fuel_efficiency >= 90.0 {
        points_earned += FUEL_EFFICIENCY_BONUS;
        badges_earned.push(BADGE_ECO_DRIVER.to_string());
    }

    Evaluation {
        avg_score,
        grade: grade_for(avg_score),
        points_earned,
        badges_earned,
    }
}

pub fn grade_for(avg_score: f64) -> Grade {
    if avg_score >= GRADE_A_THRESHOLD {
        Grade::A
    } else if avg_score >= GRADE_B_THRESHOLD {
        Grade::B
    } else {
        Grade::C
    }
}

pub fn tips_for(grade: Grade) -> Vec<String> {
    match grade {
        Grade::A => vec!["Excellent performance! Keep it up!".to_string()],
        Grade::B | Grade::C => vec![
            "Consider reducing harsh braking".to_string(),
            "Maintain steady speed for better fuel efficiency".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, grade_for, TripTelemetry};
    use crate::models::trip::Grade;

    fn telemetry(fuel: f64, harsh: u32, route: f64) -> TripTelemetry {
        TripTelemetry {
            fuel_efficiency: fuel,
            harsh_braking: harsh,
            route_adherence: route,
            idle_minutes: 0,
        }
    }

    #[test]
    fn clean_trip_earns_all_bonuses() {
        let result = evaluate(&telemetry(90.0, 0, 95.0));

        assert!((result.avg_score - 95.0).abs() < 1e-9);
        assert_eq!(result.grade, Grade::A);
        assert_eq!(result.points_earned, 105);
        assert_eq!(
            result.badges_earned,
            vec!["On-Time Hero", "Safety Star", "Eco Driver"]
        );
    }

    #[test]
    fn average_exactly_70_is_grade_b_with_no_points() {
        let result = evaluate(&telemetry(60.0, 10, 60.0));

        assert!((result.avg_score - 70.0).abs() < 1e-9);
        assert_eq!(result.grade, Grade::B);
        assert_eq!(result.points_earned, 0);
        assert!(result.badges_earned.is_empty());
    }

    #[test]
    fn average_exactly_85_is_grade_a() {
        // (80 + 95 + 80) / 3 == 85
        let result = evaluate(&telemetry(80.0, 5, 80.0));

        assert_eq!(result.grade, Grade::A);
        assert_eq!(result.points_earned, 20);
    }

    #[test]
    fn excessive_harsh_braking_drives_average_negative() {
        let result = evaluate(&telemetry(50.0, 200, 50.0));

        assert!(result.avg_score < 0.0);
        assert_eq!(result.grade, Grade::C);
        assert_eq!(result.points_earned, 0);
    }

    #[test]
    fn route_adherence_bonus_is_independent_of_grade() {
        // Poor fuel and heavy braking, but on time: only the route bonus.
        let result = evaluate(&telemetry(20.0, 50, 95.0));

        assert_eq!(result.grade, Grade::C);
        assert_eq!(result.points_earned, 50);
        assert_eq!(result.badges_earned, vec!["On-Time Hero"]);
    }

    #[test]
    fn grade_boundaries_are_inclusive() {
        assert_eq!(grade_for(85.0), Grade::A);
        assert_eq!(grade_for(84.999), Grade::B);
        assert_eq!(grade_for(70.0), Grade::B);
        assert_eq!(grade_for(69.999), Grade::C);
    }
}
