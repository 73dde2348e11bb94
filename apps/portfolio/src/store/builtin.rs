//! Content compiled into the binary. Used when no content file is configured.

use crate::models::portfolio::{
    EducationEntry, ExperienceEntry, Portfolio, Profile, Project, SkillGroup,
};

pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Maheswaren CHINNASAMY".to_string(),
            title: "Software Developer \u{2014} Aspiring Software Tester".to_string(),
            location: "Mauritius".to_string(),
            summary: "I'm Maheswaren, a software developer and aspiring software test engineer. \
                      I work with AI, IoT, mobile development (Flutter), and automation. \
                      I love building practical projects that solve real problems."
                .to_string(),
            profile_image: "/static/images/image.png".to_string(),
            email: "ychinnasamy48@gmail.com".to_string(),
            linkedin: "https://www.linkedin.com/in/maheswaren-chinnasamy-2a5a5a296/".to_string(),
            github: "https://github.com/YovenBlast".to_string(),
        },
        skills: vec![
            skill_group("languages", &["Python", "Java", "Dart (Flutter)", "JavaScript"]),
            skill_group("frameworks", &["Flask", "Flutter", "React (basic)", "Node.js"]),
            skill_group("tools", &["Git", "Firebase", "Postman", "Selenium", "JUnit"]),
        ],
        education: vec![EducationEntry {
            degree: "BSc (Hons) Software Engineering".to_string(),
            school: "University of Technology, Mauritius".to_string(),
            date: "Expected Feb 2025".to_string(),
        }],
        certifications: vec![],
        experience: vec![
            ExperienceEntry {
                role: "Software Tester Intern".to_string(),
                company: "SD Worx Mauritius".to_string(),
                date: "March 2024".to_string(),
                details: "Worked on real-world testing tasks; learned teamwork, workflows, and testing tools."
                    .to_string(),
                position: None,
                technologies: vec![],
                tasks: vec![],
            },
            ExperienceEntry {
                role: "Working at CIM Finance Services Ltd".to_string(),
                company: "CIM Finance Services Ltd".to_string(),
                date: "Present".to_string(),
                details: "I work in software testing and development, doing forms, AI integration, and automations."
                    .to_string(),
                position: None,
                technologies: vec![],
                tasks: vec![],
            },
        ],
        projects: vec![
            project(
                "smart_compost",
                "Smart Composting Bin",
                "IoT smart compost bin using ESP8266, multiple sensors (temp, moisture, pH, gas) and Firebase real-time DB.",
                &["ESP8266", "MQ4/MQ8", "Firebase", "Python (data processing)"],
                "Designed sensor system, integrated Firebase streaming and dashboard, defined composting phases.",
                "/static/projects/compostBin.png",
                "https://github.com/TODO/smart-composting-bin",
            ),
            project(
                "smart_parking",
                "IoT-Based Smart Parking System",
                "Ultrasonic sensors detect car presence in zones; data sent via ESP8266 to a cloud DB.",
                &["ESP8266", "Ultrasonic sensors", "Firebase"],
                "Sensor interfacing, zone logic, cloud push and simple web dashboard.",
                "/static/projects/parking.webp",
                "https://github.com/YovenBlast/Smart-Parking-System",
            ),
            project(
                "hotel_app",
                "Hotel Booking App (Flutter)",
                "A Flutter hotel booking app with booking history and room management features.",
                &["Flutter", "Dart", "Firebase"],
                "Built UI, booking logic, and integrated database helpers for images and room numbers.",
                "/static/projects/HotelBooking.png",
                "https://github.com/TODO/hotel-booking-app",
            ),
            project(
                "trash_tamer",
                "Trash Tamer (Game)",
                "A physics-based game built with Construct 3 including AdMob and Facebook sharing integrations.",
                &["Construct 3", "AdMob", "Facebook OAuth"],
                "Game design, ad integration, and social sharing implementation.",
                "/static/projects/trash.jpg",
                "https://github.com/YovenBlast/Trash_Tamer_Homepage",
            ),
            project(
                "mq4_butane",
                "Butane Detection System",
                "Butane gas detection using MQ4 sensor and ESP8266 with LED alerts and Firebase logging.",
                &["ESP8266", "MQ4", "Firebase"],
                "Wiring, threshold logic, and cloud logging. Provided code to trigger LED on detection.",
                "/static/projects/mq4.jpg",
                "https://github.com/TODO/butane-detection",
            ),
            project(
                "java_datetime",
                "Java Date & Time Adjustment Program",
                "A console-based Java application that validates dates, detects leap years, and automatically adjusts time when adding hours, minutes, or seconds.",
                &["Java", "Scanner", "Algorithms"],
                "Built full date-time logic: leap year detection, input validation, automatic rollover of time and date.",
                "/static/projects/java1.jpg",
                "",
            ),
        ],
    }
}

fn skill_group(category: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        category: category.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn project(
    id: &str,
    name: &str,
    summary: &str,
    stack: &[&str],
    contribution: &str,
    image: &str,
    repo_url: &str,
) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        summary: summary.to_string(),
        stack: stack.iter().map(|s| s.to_string()).collect(),
        contribution: contribution.to_string(),
        image: image.to_string(),
        repo_url: Some(repo_url.to_string()),
        demo_url: None,
        video_url: None,
        images_url: None,
    }
}
