// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

mod helpers;

mod attendance_api_test;
mod health_check;
mod leaderboard_test;
mod milestones_test;
