// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

/// 外部版本控制系统指标特质
///
/// 外部协作方接口：仅以不透明计数的形式消费GitLab的
/// 提交数据，用于里程碑展示。
#[async_trait]
pub trait VcsMetrics: Send + Sync {
    /// 查询某用户的提交数
    async fn commit_count(&self, username: &str) -> anyhow::Result<u64>;
}

/// 空实现，未配置GitLab集成时使用
pub struct NoopVcsMetrics;

#[async_trait]
impl VcsMetrics for NoopVcsMetrics {
    async fn commit_count(&self, _username: &str) -> anyhow::Result<u64> {
        Ok(0)
    }
}
