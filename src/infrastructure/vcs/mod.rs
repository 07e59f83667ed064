// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// GitLab指标客户端模块
pub mod gitlab_metrics;
