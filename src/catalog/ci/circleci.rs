// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CircleCI catalog.

use super::super::{Catalog, PrefixSpec, VarSpec, prefix, var};

static CIRCLE_CI_VARS: &[VarSpec] = &[
    var("CI", "CI", "Represents whether the current environment is a CI environment"),
    var("CircleCI", "CIRCLECI", "Represents whether the current environment is a CircleCI environment"),
    var("CircleBranch", "CIRCLE_BRANCH", "The name of the Git branch currently being built."),
    var("CircleBuildNum", "CIRCLE_BUILD_NUM", "The number of the current job. Job numbers are unique for each job."),
    var("CircleBuildUrl", "CIRCLE_BUILD_URL", "The URL for the current job on CircleCI."),
    var("CircleJob", "CIRCLE_JOB", "The name of the current job."),
    var("CircleNodeIndex", "CIRCLE_NODE_INDEX", "For jobs that run with parallelism enabled, this is the index of the current parallel run. The value ranges from 0 to (CIRCLE_NODE_TOTAL - 1)"),
    var("CircleNodeTotal", "CIRCLE_NODE_TOTAL", "For jobs that run with parallelism enabled, this is the number of parallel runs. This is equivalent to the value of parallelism in your config file."),
    var("CircleOidcToken", "CIRCLE_OIDC_TOKEN", "An OpenID Connect token signed by CircleCI which includes details about the current job."),
    var("CircleOidcTokenV2", "CIRCLE_OIDC_TOKEN_V2", "An OpenID Connect token signed by CircleCI which includes details about the current job."),
    var("CircleOrganizationId", "CIRCLE_ORGANIZATION_ID", "A unique identifier for the CircleCI organization."),
    var("CirclePipelineId", "CIRCLE_PIPELINE_ID", "A unique identifier for the current pipeline."),
    var("CirclePrNumber", "CIRCLE_PR_NUMBER", "The number of the associated GitHub or Bitbucket pull request. Only available on forked PRs."),
    var("CirclePrRepoName", "CIRCLE_PR_REPONAME", "The name of the GitHub or Bitbucket repository where the pull request was created. Only available on forked PRs."),
    var("CirclePrUsername", "CIRCLE_PR_USERNAME", "The GitHub or Bitbucket username of the user who created the pull request. Only available on forked PRs."),
    var("CirclePreviousBuildNum", "CIRCLE_PREVIOUS_BUILD_NUM", "The largest job number in a given branch that is less than the current job number. Note: The variable is not always set, and is not deterministic. It is also not set on runner executors. This variable is likely to be deprecated, and CircleCI recommends users to avoid using it."),
    var("CircleProjectId", "CIRCLE_PROJECT_ID", "A unique identifier for the current project."),
    var("CircleProjectRepoName", "CIRCLE_PROJECT_REPONAME", "The name of the repository of the current project."),
    var("CircleProjectUsername", "CIRCLE_PROJECT_USERNAME", "The GitHub or Bitbucket username of the current project."),
    var("CirclePullRequest", "CIRCLE_PULL_REQUEST", "The URL of the associated pull request. If there are multiple associated pull requests, one URL is randomly chosen."),
    var("CirclePullRequests", "CIRCLE_PULL_REQUESTS", "Comma-separated list of URLs of the current build’s associated pull requests."),
    var("CircleRepositoryUrl", "CIRCLE_REPOSITORY_URL", "The URL of your GitHub or Bitbucket repository."),
    var("CircleSHA1", "CIRCLE_SHA1", "The SHA1 hash of the last commit of the current build."),
    var("CircleTag", "CIRCLE_TAG", "The name of the git tag, if the current build is tagged. For more information, see the Git tag job execution section of the Workflows page."),
    var("CircleUsername", "CIRCLE_USERNAME", "The GitHub or Bitbucket username of the user who triggered the pipeline (only if the user has a CircleCI account)."),
    var("CircleWorkflowId", "CIRCLE_WORKFLOW_ID", "A unique identifier for the workflow instance of the current job. This identifier is the same for every job in a given workflow instance."),
    var("CircleWorkflowJobId", "CIRCLE_WORKFLOW_JOB_ID", "A unique identifier for the current job."),
    var("CircleWorkflowWorkspaceId", "CIRCLE_WORKFLOW_WORKSPACE_ID", "An identifier for the workspace of the current job. This identifier is the same for every job in a given workflow."),
    var("CircleWorkingDirectory", "CIRCLE_WORKING_DIRECTORY", "The value of the working_directory key of the current job."),
    var("CircleInternalTaskData", "CIRCLE_INTERNAL_TASK_DATA", "Internal. A directory where internal data related to the job is stored. We do not document the contents of this directory; the data schema is subject to change."),
];

static CIRCLE_CI_PREFIXES: &[PrefixSpec] = &[
    prefix("CircleCIVariables", "CIRCLE_", "Signifies Circle CI configuration values."),
];

/// Represents a collection of environment variables used in CircleCI.
///
/// <https://circleci.com/docs/variables/>
pub static CIRCLE_CI: Catalog = Catalog {
    name: "circle-ci",
    title: "CircleCI",
    docs_url: "https://circleci.com/docs/variables/",
    vars: CIRCLE_CI_VARS,
    prefixes: CIRCLE_CI_PREFIXES,
};
