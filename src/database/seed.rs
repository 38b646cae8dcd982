use crate::models::Activity;

// Fixed startup data. Order here is the order `GET /activities` returns.
pub fn seed_activities() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball".to_string(),
            Activity::new(
                "Learn basketball skills and play competitive games",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["alex@mergington.edu"]),
        ),
        (
            "Soccer".to_string(),
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
                22,
            )
            .with_participants(["james@mergington.edu", "sarah@mergington.edu"]),
        ),
        (
            "Art Club".to_string(),
            Activity::new(
                "Explore painting, drawing, and other visual arts",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["lily@mergington.edu"]),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Act, direct, and produce school plays and performances",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            )
            .with_participants(["noah@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Math Club".to_string(),
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
            )
            .with_participants(["ava@mergington.edu", "ethan@mergington.edu"]),
        ),
    ]
}
