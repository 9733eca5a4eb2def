use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use eduquiz_core::model::{
    Classroom, ClassroomId, FormId, NewClassroom, QuestionResult, Quiz, QuizId, QuizResult,
    Session, StudentClassroom, Teacher,
};
use eduquiz_core::time::fixed_now;
use services::{
    ApiError, AuthService, ClassroomService, Clock, CreatedClassroom, EduApi, ResultsService,
    StudentService,
};
use storage::session_store::{InMemorySessionStore, SessionStore};

use crate::context::{AuthState, UiApp, build_app_context};
use crate::views::{
    LandingView, QuizFormView, ResultView, StudentDashboardView, TeacherAuthView,
    TeacherDashboardView,
};

/// Canned responses for every endpoint the views touch.
#[derive(Clone)]
pub struct StubApi {
    pub classrooms: Result<Vec<Classroom>, ApiError>,
    pub student: Result<Vec<StudentClassroom>, ApiError>,
    pub quiz: Result<Quiz, ApiError>,
    pub form_id: Result<FormId, ApiError>,
    pub evaluation: Result<QuizResult, ApiError>,
}

impl Default for StubApi {
    fn default() -> Self {
        Self {
            classrooms: Ok(vec![fixture_classroom()]),
            student: Ok(vec![fixture_student_classroom()]),
            quiz: Ok(fixture_quiz()),
            form_id: Ok(FormId::new("f1")),
            evaluation: Ok(fixture_result()),
        }
    }
}

pub fn fixture_teacher() -> Teacher {
    Teacher {
        name: "Ms Jane".into(),
        email: "jane@school.edu".into(),
        qualification: "MSc".into(),
    }
}

pub fn fixture_session() -> Session {
    Session::from_teacher(fixture_teacher(), fixed_now()).expect("well-formed fixture")
}

pub fn fixture_classroom() -> Classroom {
    Classroom {
        id: ClassroomId::new("c1"),
        name: "Algebra".into(),
        subject: "Math".into(),
        description: "Linear equations".into(),
        teacher: "Ms Jane".into(),
        students: vec!["s@x.com".into()],
        quizzes: vec![QuizId::new("q1")],
        created_date: Some(fixed_now()),
        status: "active".into(),
    }
}

pub fn fixture_quiz() -> Quiz {
    Quiz {
        id: QuizId::new("q1"),
        title: "Week 1".into(),
        google_form_link: Some("https://forms.example/q1".into()),
    }
}

pub fn fixture_student_classroom() -> StudentClassroom {
    StudentClassroom {
        id: ClassroomId::new("c1"),
        name: "Algebra".into(),
        subject: "Math".into(),
        quizzes: vec![fixture_quiz()],
    }
}

pub fn fixture_result() -> QuizResult {
    QuizResult {
        score: 4,
        total_questions: 5,
        percentage: 80.0,
        question_results: vec![
            QuestionResult {
                question: "2 + 2?".into(),
                user_answer: "4".into(),
                correct_answer: "4".into(),
                is_correct: true,
            },
            QuestionResult {
                question: "3 + 3?".into(),
                user_answer: "5".into(),
                correct_answer: "6".into(),
                is_correct: false,
            },
        ],
    }
}

#[async_trait]
impl EduApi for StubApi {
    async fn teacher_login(&self, _: &str, _: &str, _: &str) -> Result<Teacher, ApiError> {
        Ok(fixture_teacher())
    }

    async fn teacher_signup(
        &self,
        _: &str,
        _: &str,
        _: &str,
        _: &str,
    ) -> Result<Teacher, ApiError> {
        Ok(fixture_teacher())
    }

    async fn classrooms_for_teacher(&self, _: &str) -> Result<Vec<Classroom>, ApiError> {
        self.classrooms.clone()
    }

    async fn create_classroom(
        &self,
        _: &str,
        _: &NewClassroom,
    ) -> Result<CreatedClassroom, ApiError> {
        Ok(CreatedClassroom {
            classroom_id: ClassroomId::new("c2"),
            quiz_id: QuizId::new("q2"),
            google_form_link: Some("https://forms.example/q2".into()),
        })
    }

    async fn student_classrooms(&self, _: &str) -> Result<Vec<StudentClassroom>, ApiError> {
        self.student.clone()
    }

    async fn quiz(&self, _: &QuizId) -> Result<Quiz, ApiError> {
        self.quiz.clone()
    }

    async fn latest_form_id(&self) -> Result<FormId, ApiError> {
        self.form_id.clone()
    }

    async fn evaluate_quiz(&self, _: &FormId) -> Result<QuizResult, ApiError> {
        self.evaluation.clone()
    }
}

struct TestApp {
    auth: Arc<AuthService>,
    classrooms: Arc<ClassroomService>,
    students: Arc<StudentService>,
    results: Arc<ResultsService>,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn classrooms(&self) -> Arc<ClassroomService> {
        Arc::clone(&self.classrooms)
    }

    fn students(&self) -> Arc<StudentService> {
        Arc::clone(&self.students)
    }

    fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    TeacherAuth,
    TeacherDashboard,
    StudentDashboard,
    QuizForm(String),
    Result,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<dyn UiApp>,
    auth_state: AuthState,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    use_context_provider(|| Signal::new(props.auth_state.clone()));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::TeacherAuth => rsx! { TeacherAuthView {} },
        ViewKind::TeacherDashboard => rsx! { TeacherDashboardView {} },
        ViewKind::StudentDashboard => rsx! { StudentDashboardView {} },
        ViewKind::QuizForm(quiz_id) => rsx! { QuizFormView { quiz_id } },
        ViewKind::Result => rsx! { ResultView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: Arc<InMemorySessionStore>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind, stub: StubApi, auth_state: AuthState) -> ViewHarness {
    let store = Arc::new(InMemorySessionStore::new());
    if let AuthState::Authenticated(session) = &auth_state {
        store.save(session).await.expect("seed session");
    }

    let clock = Clock::fixed(fixed_now());
    let api: Arc<dyn EduApi> = Arc::new(stub);
    let store_dyn: Arc<dyn SessionStore> = Arc::clone(&store) as Arc<dyn SessionStore>;

    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        auth: Arc::new(AuthService::new(clock, Arc::clone(&api), store_dyn)),
        classrooms: Arc::new(ClassroomService::new(clock, Arc::clone(&api))),
        students: Arc::new(StudentService::new(Arc::clone(&api))),
        results: Arc::new(ResultsService::new(api)),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            auth_state,
            view,
        },
    );

    ViewHarness { dom, store }
}
