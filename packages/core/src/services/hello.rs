use crate::repository::HelloRepository;

#[derive(Debug, Clone, Default)]
pub struct HelloService {
    repository: HelloRepository,
}

impl HelloService {
    pub fn new(repository: HelloRepository) -> Self {
        Self { repository }
    }

    pub fn ping(&self) -> String {
        self.repository.ping()
    }
}
