#![allow(dead_code)]
use reqwest::Url;

pub struct TestAppClient {
    url: Url,
    client: reqwest::Client,
}

impl TestAppClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn hello(&self) -> reqwest::Response {
        self.client.get(self.url.clone()).send().await.unwrap()
    }

    pub async fn health(&self) -> reqwest::Response {
        self.client
            .get(self.url.join("health").unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url.join("todos").unwrap())
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn get_todo(&self, todo_id: &str) -> reqwest::Response {
        self.client
            .get(self.url.join(&format!("todos/{}", todo_id)).unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn get_all_todos(&self) -> reqwest::Response {
        self.client
            .get(self.url.join("todos").unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn update_todo(&self, todo_id: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .put(self.url.join(&format!("todos/{}", todo_id)).unwrap())
            .json(body)
            .send()
            .await
            .unwrap()
    }
}
