use std::sync::Arc;

use chrono::Utc;
use futures_util::future::join_all;
use leetlog_core::{
    Goal, GoalInput, RoadmapParams, TopicPlan, fallback_roadmap, strip_markdown_links,
};
use leetlog_llm::LlmClient;

use crate::ServiceError;

/// Creates goals and their per-topic study roadmaps.
///
/// Without a client every roadmap comes from the deterministic template;
/// with one, the AI path is tried first (two attempts) and the template
/// substitutes on failure. Goal creation never fails on the AI's account.
pub struct GoalService {
    llm: Option<Arc<LlmClient>>,
}

impl GoalService {
    #[must_use]
    pub const fn new(llm: Option<Arc<LlmClient>>) -> Self {
        Self { llm }
    }

    /// Creates a goal: validates the input, parses topics from the title,
    /// splits the problem budget evenly (ceiling) across them, and generates
    /// one roadmap per topic concurrently, preserving title order. Roadmaps
    /// are generated exactly once here; later edits never regenerate them.
    pub async fn create_goal(&self, input: GoalInput) -> Result<Goal, ServiceError> {
        let topics = input.validate()?;
        let per_topic = input.problem_count.div_ceil(topics.len() as u32);
        let now = Utc::now();
        tracing::debug!(user_id = %input.user_id, topic_count = topics.len(), "creating goal");

        let plans = join_all(topics.iter().map(|topic| {
            let params = RoadmapParams::new(
                input.daily_time,
                input.learning_style,
                per_topic,
                input.target_date,
                now,
                topic,
            );
            async move {
                let name = params.topic.clone();
                let roadmap = self.topic_roadmap(&params).await;
                TopicPlan { name, roadmap }
            }
        }))
        .await;

        Ok(Goal {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: input.user_id,
            title: input.title,
            target_date: input.target_date,
            problem_count: input.problem_count,
            daily_time: input.daily_time,
            learning_style: input.learning_style,
            progress: 0,
            missed_goal_reason: None,
            topics: plans,
            created_at: now,
        })
    }

    /// One topic's roadmap text: the AI paragraph when a client is configured
    /// and responds, the template otherwise. Always non-empty, with markdown
    /// links stripped from either path.
    async fn topic_roadmap(&self, params: &RoadmapParams) -> String {
        let text = match &self.llm {
            Some(llm) => match llm.roadmap_paragraph(params).await {
                Ok(paragraph) => paragraph,
                Err(error) => {
                    tracing::warn!(topic = %params.topic, %error, "roadmap fell back to template");
                    fallback_roadmap(params)
                },
            },
            None => fallback_roadmap(params),
        };
        strip_markdown_links(&text)
    }
}
