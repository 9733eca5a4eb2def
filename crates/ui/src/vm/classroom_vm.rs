use chrono::{DateTime, Utc};
use eduquiz_core::model::{Classroom, ClassroomId};

/// UI-ready representation of a classroom for the dashboard cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassroomCardVm {
    pub id: ClassroomId,
    pub name: String,
    pub subject: String,
    pub description: String,
    pub status: String,
    pub student_count: usize,
    pub quiz_count: usize,
    pub created_str: String,
}

/// Convert domain classrooms into dashboard view models.
#[must_use]
pub fn map_classroom_cards(classrooms: &[Classroom]) -> Vec<ClassroomCardVm> {
    classrooms.iter().map(map_classroom_card).collect()
}

#[must_use]
pub fn map_classroom_card(classroom: &Classroom) -> ClassroomCardVm {
    ClassroomCardVm {
        id: classroom.id.clone(),
        name: classroom.name.clone(),
        subject: classroom.subject.clone(),
        description: classroom.description.clone(),
        status: classroom.status.clone(),
        student_count: classroom.students.len(),
        quiz_count: classroom.quizzes.len(),
        created_str: format_created(classroom.created_date),
    }
}

fn format_created(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => "N/A".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use eduquiz_core::model::QuizId;

    fn classroom(created: Option<DateTime<Utc>>) -> Classroom {
        Classroom {
            id: ClassroomId::new("c1"),
            name: "Algebra".into(),
            subject: "Math".into(),
            description: "Linear equations".into(),
            teacher: "Ms Jane".into(),
            students: vec!["a@x.com".into(), "b@x.com".into()],
            quizzes: vec![QuizId::new("q1")],
            created_date: created,
            status: "active".into(),
        }
    }

    #[test]
    fn maps_counts_and_date() {
        let created = Utc.with_ymd_and_hms(2024, 6, 12, 9, 30, 0).unwrap();
        let cards = map_classroom_cards(&[classroom(Some(created))]);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].student_count, 2);
        assert_eq!(cards[0].quiz_count, 1);
        assert_eq!(cards[0].created_str, "12 Jun 2024");
    }

    #[test]
    fn missing_date_renders_placeholder() {
        let cards = map_classroom_cards(&[classroom(None)]);
        assert_eq!(cards[0].created_str, "N/A");
    }
}
