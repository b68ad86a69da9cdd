use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde::Deserialize;
use tower::ServiceExt;
use trivia_api::{router, state::ApiState};
use trivia_db::MemoryStore;

/// Test state builder backed by an in-memory store
pub struct TestStateBuilder {
    store: MemoryStore,
}

impl TestStateBuilder {
    /// Store seeded with the six default categories and no questions
    pub fn new() -> Self {
        Self {
            store: MemoryStore::with_default_categories(),
        }
    }

    /// Store with no categories at all
    pub fn empty() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }

    pub fn build(self) -> ApiState {
        ApiState::new(self.store)
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a client over the full router for `state`
pub fn client(state: &ApiState) -> TestClient {
    TestClient::new(router::router().with_state(state.clone()))
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a DELETE request
    pub async fn delete(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");
        self.post_raw(uri, &json_body).await
    }

    /// Send a POST request with an arbitrary (possibly malformed) JSON body
    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.request(request).await
    }
}

/// Ids of the `questions` array in a listing response, in order
pub fn question_ids(json: &serde_json::Value) -> Vec<i64> {
    json["questions"]
        .as_array()
        .expect("questions should be an array")
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }

    /// Assert the standard error body for `status`
    pub fn assert_error(&self, status: StatusCode, message: &str) {
        self.assert_status(status);
        let json: serde_json::Value = self.json();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], status.as_u16());
        assert_eq!(json["message"], message);
    }
}

/// Store seeding helpers
pub mod db {
    use trivia_api::state::ApiState;
    use trivia_db::models::{NewQuestion, Question};

    pub fn new_question(text: &str, answer: &str, category: i64, difficulty: i32) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        }
    }

    /// Insert one question directly through the store
    pub async fn seed_question(state: &ApiState, new_question: NewQuestion) -> Question {
        state
            .store
            .insert_question(new_question)
            .await
            .expect("Failed to seed question")
    }

    /// Insert `count` numbered questions in `category`, returning them in id order
    pub async fn seed_numbered(state: &ApiState, count: usize, category: i64) -> Vec<Question> {
        let mut questions = Vec::with_capacity(count);
        for i in 1..=count {
            let q = new_question(
                &format!("Numbered question {i} of category {category}"),
                &format!("Answer {i}"),
                category,
                (i % 5) as i32 + 1,
            );
            questions.push(seed_question(state, q).await);
        }
        questions
    }

    /// A handful of realistic questions across several categories
    pub async fn seed_trivia(state: &ApiState) -> Vec<Question> {
        let rows = [
            (
                "What is the heaviest organ in the human body?",
                "The Liver",
                1,
                4,
            ),
            ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
            (
                "Which Dutch graphic artist–initials M C was a creator of optical illusions?",
                "Escher",
                2,
                1,
            ),
            ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
            (
                "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
                "Maya Angelou",
                4,
                2,
            ),
            (
                "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
                "Apollo 13",
                5,
                4,
            ),
            (
                "What was the title of the 1990 fantasy directed by Tim Burton?",
                "Edward Scissorhands",
                5,
                3,
            ),
            (
                "Which country won the first ever soccer World Cup in 1930?",
                "Uruguay",
                6,
                4,
            ),
        ];

        let mut questions = Vec::with_capacity(rows.len());
        for (text, answer, category, difficulty) in rows {
            let new = new_question(text, answer, category, difficulty);
            questions.push(seed_question(state, new).await);
        }
        questions
    }
}
