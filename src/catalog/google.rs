// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Google Cloud Run catalogs.

use super::{Catalog, PrefixSpec, VarSpec, prefix, var};

static CLOUD_RUN_VARS: &[VarSpec] = &[
    var("Port", "PORT", "The port your HTTP server should listen on."),
    var("KService", "K_SERVICE", "The name of the Cloud Run service being run."),
    var("KRevision", "K_REVISION", "The name of the Cloud Run revision being run."),
    var("KConfiguration", "K_CONFIGURATION", "The name of the Cloud Run configuration that created the revision."),
    var("GoogleCloudProject", "GOOGLE_CLOUD_PROJECT", "Project name."),
    var("GoogleCloudRegion", "GOOGLE_CLOUD_REGION", "Region name."),
];

static CLOUD_RUN_PREFIXES: &[PrefixSpec] = &[
    prefix("GoogleEnvironmentVariables", "X_GOOGLE_", "Signifies a variable is specific to the Google reserved settings."),
    prefix("KEnvironmentVariables", "K_", "Signifies a variable is specific to the K-native reserved settings."),
    prefix("CloudEnvironmentVariables", "CLOUD_", "Signifies a variable is specific to the Google Cloud reserved settings."),
];

/// Google CloudRun environment variables.
///
/// <https://cloud.google.com/run/docs/container-contract?hl=en>
pub static CLOUD_RUN: Catalog = Catalog {
    name: "cloud-run",
    title: "Google Cloud Run",
    docs_url: "https://cloud.google.com/run/docs/container-contract?hl=en",
    vars: CLOUD_RUN_VARS,
    prefixes: CLOUD_RUN_PREFIXES,
};

static CLOUD_RUN_FUNCTIONS_VARS: &[VarSpec] = &[
    var("FunctionTarget", "FUNCTION_TARGET", "Reserved: The function to be executed."),
    var("FunctionSignatureType", "FUNCTION_SIGNATURE_TYPE", "Reserved: The type of the function: http for HTTP functions, and event for event-driven functions."),
];

/// Google Cloud Run Functions environment variables.
///
/// <https://cloud.google.com/functions/docs/configuring/env-var?hl=en>
pub static CLOUD_RUN_FUNCTIONS: Catalog = Catalog {
    name: "cloud-run-functions",
    title: "Google Cloud Run Functions",
    docs_url: "https://cloud.google.com/functions/docs/configuring/env-var?hl=en",
    vars: CLOUD_RUN_FUNCTIONS_VARS,
    prefixes: &[],
};

static CLOUD_RUN_JOBS_VARS: &[VarSpec] = &[
    var("CloudRunJob", "CLOUD_RUN_JOB", "The name of the Cloud Run job being run."),
    var("CloudRunExecution", "CLOUD_RUN_EXECUTION", "The name of the Cloud Run execution being run."),
    var("CloudRunTaskIndex", "CLOUD_RUN_TASK_INDEX", "The index of this task. Starts at 0 for the first task and increments by 1 for every successive task, up to the maximum number of tasks minus 1. If you set --parallelism to greater than 1, tasks might not follow the index order. For example, it would be possible for task 2 to start before task 1."),
    var("CloudRunTaskAttempt", "CLOUD_RUN_TASK_ATTEMPT", "The number of times this task has been retried. Starts at 0 for the first attempt and increments by 1 for every successive retry, up to the maximum retries value."),
    var("CloudRunTaskCount", "CLOUD_RUN_TASK_COUNT", "The number of tasks defined in the --tasks parameter."),
];

/// Google CloudRun Jobs environment variables.
///
/// <https://cloud.google.com/run/docs/container-contract?hl=en>
pub static CLOUD_RUN_JOBS: Catalog = Catalog {
    name: "cloud-run-jobs",
    title: "Google Cloud Run Jobs",
    docs_url: "https://cloud.google.com/run/docs/container-contract?hl=en",
    vars: CLOUD_RUN_JOBS_VARS,
    prefixes: &[],
};
