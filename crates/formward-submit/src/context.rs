use formward_conf::Settings;
use std::sync::Arc;
use uuid::Uuid;

/// State scoped to one submission.
///
/// Built once per request and handed to the handler explicitly. Nothing in
/// here outlives the request except the shared, read-only settings.
#[derive(Debug, Clone)]
pub struct RequestContext {
	request_id: Uuid,
	settings: Arc<Settings>,
}

impl RequestContext {
	pub fn new(settings: Arc<Settings>) -> Self {
		Self {
			request_id: Uuid::new_v4(),
			settings,
		}
	}

	pub fn request_id(&self) -> Uuid {
		self.request_id
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}
}

impl Default for RequestContext {
	fn default() -> Self {
		Self::new(Arc::new(Settings::default()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_each_request_gets_own_id() {
		let settings = Arc::new(Settings::default());
		let a = RequestContext::new(Arc::clone(&settings));
		let b = RequestContext::new(settings);
		assert_ne!(a.request_id(), b.request_id());
	}
}
