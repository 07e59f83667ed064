// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::vcs_metrics::VcsMetrics;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

/// GitLab指标客户端
///
/// 通过GitLab REST API查询用户的推送事件数，作为里程碑
/// 展示用的不透明提交计数。查询失败不会使调用方出错，
/// 由调用方决定回退行为。
pub struct GitLabMetricsClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GitLabUser {
    id: u64,
}

impl GitLabMetricsClient {
    /// 创建新的GitLab指标客户端
    ///
    /// # 参数
    ///
    /// * `base_url` - GitLab实例基础URL
    /// * `token` - 访问令牌（可选）
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.header("PRIVATE-TOKEN", token.clone());
        }
        request
    }
}

#[async_trait]
impl VcsMetrics for GitLabMetricsClient {
    async fn commit_count(&self, username: &str) -> anyhow::Result<u64> {
        let users: Vec<GitLabUser> = self
            .get(format!(
                "{}/api/v4/users?username={}",
                self.base_url, username
            ))
            .send()
            .await
            .context("gitlab user lookup failed")?
            .error_for_status()?
            .json()
            .await?;

        let user = match users.first() {
            Some(user) => user,
            None => return Ok(0),
        };

        // 推送事件数作为提交计数的近似值
        let events: Vec<serde_json::Value> = self
            .get(format!(
                "{}/api/v4/users/{}/events?action=pushed&per_page=100",
                self.base_url, user.id
            ))
            .send()
            .await
            .context("gitlab events lookup failed")?
            .error_for_status()?
            .json()
            .await?;

        Ok(events.len() as u64)
    }
}
