//! Prompt template sent to the completion provider.

use crate::allocation::AllocationEntry;
use crate::request::StudyRequest;

/// Persona given to the model as the system message.
pub const SYSTEM_PROMPT: &str = "You are an AI education assistant.";

/// Fixed instructions appended after the initial plan.
pub const TASKS: [&str; 4] = [
    "Improve the study plan",
    "Add a revision strategy",
    "Give short motivational advice",
    "Keep it concise and practical",
];

/// Render the request and its allocation into the user prompt.
///
/// The allocation is rendered in the order given; [`crate::allocate`] already
/// places weak subjects first.
pub fn build_prompt(request: &StudyRequest, allocation: &[AllocationEntry]) -> String {
    let mut prompt = String::from("Student details:\n");
    prompt.push_str(&format!("Class level: {}\n", request.class_level));
    prompt.push_str(&format!("Subjects: {}\n", list_or_none(&request.subjects)));
    prompt.push_str(&format!(
        "Weak subjects: {}\n",
        list_or_none(&request.weak_subjects)
    ));
    prompt.push_str(&format!("Daily study hours: {}\n", request.daily_hours));
    prompt.push_str(&format!("Exam in {} days\n", request.exam_days));

    prompt.push_str("\nInitial plan:\n");
    for entry in allocation {
        prompt.push_str(&entry.render());
        prompt.push('\n');
    }

    prompt.push_str("\nTasks:\n");
    for (i, task) in TASKS.iter().enumerate() {
        prompt.push_str(&format!("{}. {task}\n", i + 1));
    }
    prompt
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".into()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(daily_hours: f64) -> StudyRequest {
        StudyRequest {
            class_level: "Class 10".into(),
            subjects: vec!["Maths".into(), "Science".into(), "English".into()],
            weak_subjects: vec!["Maths".into()],
            daily_hours,
            exam_days: 20,
        }
    }

    #[test]
    fn reference_prompt_contains_allocation_lines() {
        let req = request(3.0);
        let prompt = build_prompt(&req, &req.allocation());

        assert!(prompt.contains("Class level: Class 10\n"));
        assert!(prompt.contains("Subjects: Maths, Science, English\n"));
        assert!(prompt.contains("Weak subjects: Maths\n"));
        assert!(prompt.contains("Daily study hours: 3\n"));
        assert!(prompt.contains("Exam in 20 days\n"));
        assert!(prompt.contains("Maths: 1.8 hours (focus on weak areas)\n"));
        assert!(prompt.contains("Science: 0.4 hours\n"));
        assert!(prompt.contains("English: 0.4 hours\n"));
    }

    #[test]
    fn weak_lines_precede_normal_lines() {
        let req = StudyRequest {
            subjects: vec!["English".into(), "Maths".into()],
            ..request(3.0)
        };
        let prompt = build_prompt(&req, &req.allocation());
        let weak = prompt.find("Maths: 1.8 hours (focus").unwrap();
        let normal = prompt.find("English: ").unwrap();
        assert!(weak < normal);
    }

    #[test]
    fn ends_with_the_four_tasks() {
        let req = request(3.0);
        let prompt = build_prompt(&req, &req.allocation());
        assert!(prompt.ends_with(
            "Tasks:\n1. Improve the study plan\n2. Add a revision strategy\n\
             3. Give short motivational advice\n4. Keep it concise and practical\n"
        ));
    }

    #[test]
    fn zero_hours_still_builds() {
        let req = request(0.0);
        let prompt = build_prompt(&req, &req.allocation());
        assert!(prompt.contains("Daily study hours: 0\n"));
        assert!(prompt.contains("Science: 0.0 hours\n"));
    }

    #[test]
    fn empty_weak_list_renders_none() {
        let req = StudyRequest {
            weak_subjects: vec![],
            ..request(2.5)
        };
        let prompt = build_prompt(&req, &req.allocation());
        assert!(prompt.contains("Weak subjects: None\n"));
        assert!(prompt.contains("Daily study hours: 2.5\n"));
        assert!(!prompt.contains("focus on weak areas"));
    }
}
