// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! AppVeyor catalog.

use super::super::{Catalog, PrefixSpec, VarSpec, prefix, var};

static APPVEYOR_VARS: &[VarSpec] = &[
    var("AppVeyor", "APPVEYOR", "True (or true on Ubuntu image) if the build is running in the AppVeyor environment."),
    var("CI", "CI", "True (or true on Ubuntu image) if the build is running in the AppVeyor environment."),
    var("AppVeyorUrl", "APPVEYOR_URL", "The URL of AppVeyor's central server(s). For hosted service, it is https://ci.appveyor.com; for on-premise, it is a specific server URL."),
    var("AppVeyorApiUrl", "APPVEYOR_API_URL", "The URL of AppVeyor Build Agent API."),
    var("AppVeyorAccountName", "APPVEYOR_ACCOUNT_NAME", "The name of the AppVeyor account."),
    var("AppVeyorProjectId", "APPVEYOR_PROJECT_ID", "The unique project ID in AppVeyor."),
    var("AppVeyorProjectName", "APPVEYOR_PROJECT_NAME", "The name of the project in AppVeyor."),
    var("AppVeyorProjectSlug", "APPVEYOR_PROJECT_SLUG", "The project slug (used in the project details URL)."),
    var("AppVeyorBuildFolder", "APPVEYOR_BUILD_FOLDER", "The path to the directory where the repository is cloned."),
    var("AppVeyorBuildId", "APPVEYOR_BUILD_ID", "The unique build ID in AppVeyor."),
    var("AppVeyorBuildNumber", "APPVEYOR_BUILD_NUMBER", "The build number."),
    var("AppVeyorBuildVersion", "APPVEYOR_BUILD_VERSION", "The build version."),
    var("AppVeyorBuildWorkerImage", "APPVEYOR_BUILD_WORKER_IMAGE", "The build worker image the build is running on (e.g., Visual Studio 2015)."),
    var("AppVeyorPullRequestNumber", "APPVEYOR_PULL_REQUEST_NUMBER", "The Pull (Merge) Request number."),
    var("AppVeyorPullRequestTitle", "APPVEYOR_PULL_REQUEST_TITLE", "The title of the Pull (Merge) Request."),
    var("AppVeyorPullRequestHeadRepoName", "APPVEYOR_PULL_REQUEST_HEAD_REPO_NAME", "The source repository of the Pull (Merge) Request."),
    var("AppVeyorPullRequestHeadRepoBranch", "APPVEYOR_PULL_REQUEST_HEAD_REPO_BRANCH", "The source branch of the Pull (Merge) Request."),
    var("AppVeyorPullRequestHeadCommit", "APPVEYOR_PULL_REQUEST_HEAD_COMMIT", "The commit ID (SHA) of the source commit in the Pull (Merge) Request."),
    var("AppVeyorJobId", "APPVEYOR_JOB_ID", "The unique job ID in AppVeyor."),
    var("AppVeyorJobName", "APPVEYOR_JOB_NAME", "The name of the job."),
    var("AppVeyorJobNumber", "APPVEYOR_JOB_NUMBER", "The job number (e.g., 1, 2, etc.)."),
    var("AppVeyorRepoProvider", "APPVEYOR_REPO_PROVIDER", "The repository provider (e.g., gitHub, bitBucket, gitLab, git, subversion, etc.)."),
    var("AppVeyorRepoSCM", "APPVEYOR_REPO_SCM", "The source control management system used (git or mercurial)."),
    var("AppVeyorRepoName", "APPVEYOR_REPO_NAME", "The name of the repository in the format owner-name/repo-name."),
    var("AppVeyorRepoBranch", "APPVEYOR_REPO_BRANCH", "The branch on which the build is running. For Pull Requests, this is the base branch the PR is merging into."),
    var("AppVeyorRepoTag", "APPVEYOR_REPO_TAG", "True if the build was triggered by a pushed tag, false otherwise."),
    var("AppVeyorRepoTagName", "APPVEYOR_REPO_TAG_NAME", "The tag name for builds triggered by a tag (undefined otherwise)."),
    var("AppVeyorRepoCommit", "APPVEYOR_REPO_COMMIT", "The commit ID (SHA) of the current build."),
    var("AppVeyorRepoCommitAuthor", "APPVEYOR_REPO_COMMIT_AUTHOR", "The author of the commit."),
    var("AppVeyorRepoCommitAuthorEmail", "APPVEYOR_REPO_COMMIT_AUTHOR_EMAIL", "The email address of the commit author."),
    var("AppVeyorRepoCommitTimestamp", "APPVEYOR_REPO_COMMIT_TIMESTAMP", "The date and time of the commit in ISO 8601 format."),
    var("AppVeyorRepoCommitMessage", "APPVEYOR_REPO_COMMIT_MESSAGE", "The message of the commit."),
    var("AppVeyorRepoCommitMessageExtended", "APPVEYOR_REPO_COMMIT_MESSAGE_EXTENDED", "The rest of the commit message after the line break (if any)."),
    var("AppVeyorScheduledBuild", "APPVEYOR_SCHEDULED_BUILD", "True if the build was triggered by a scheduler."),
    var("AppVeyorForcedBuild", "APPVEYOR_FORCED_BUILD", "True if the build was started by the \"New build\" button or via the API."),
    var("AppVeyorReBuild", "APPVEYOR_RE_BUILD", "True if the build was restarted by the \"Re-build commit/PR\" button or via the API."),
    var("AppVeyorReRunIncomplete", "APPVEYOR_RE_RUN_INCOMPLETE", "True if the job was restarted by the \"Re-run incomplete\" button or via the API."),
    var("Platform", "PLATFORM", "The platform name set on the Build tab of the project settings or specified in the appveyor.yml file."),
    var("Configuration", "CONFIGURATION", "The configuration name set on the Build tab of the project settings or specified in the appveyor.yml file."),
    var("AppVeyorArtifactUploadTimeout", "APPVEYOR_ARTIFACT_UPLOAD_TIMEOUT", "The timeout (in seconds) for uploading artifacts (default is 600 seconds)."),
    var("AppVeyorFileDownloadTimeout", "APPVEYOR_FILE_DOWNLOAD_TIMEOUT", "The timeout (in seconds) for downloading arbitrary files using the DownloadFile command (default is 300 seconds)."),
    var("AppVeyorRepositoryShallowCloneTimeout", "APPVEYOR_REPOSITORY_SHALLOW_CLONE_TIMEOUT", "The timeout (in seconds) for shallow cloning the repository (default is 1800 seconds)."),
    var("AppVeyorCacheEntryUploadDownloadTimeout", "APPVEYOR_CACHE_ENTRY_UPLOAD_DOWNLOAD_TIMEOUT", "The timeout (in seconds) for downloading or uploading each cache entry (default is 300 seconds)."),
    var("AppVeyorCacheSkipRestore", "APPVEYOR_CACHE_SKIP_RESTORE", "Set to true to disable cache restore."),
    var("AppVeyorCacheSkipSave", "APPVEYOR_CACHE_SKIP_SAVE", "Set to true to disable cache update."),
    var("AppVeyorWapArtifactName", "APPVEYOR_WAP_ARTIFACT_NAME", "Custom name for the Web Application Package (WAP) artifact (default is the same as the project name)."),
    var("AppVeyorWapSkipAcls", "APPVEYOR_WAP_SKIP_ACLS", "Set to true to create a WAP package that prevents Web Deploy from updating Access Control Lists (ACLs)."),
    var("AppVeyorSkipFinalizeOnExit", "APPVEYOR_SKIP_FINALIZE_ON_EXIT", "If set to true, skips the Finalize steps (e.g., on_success, on_finish scripts, and build cache save) when exiting the build early."),
    var("AppVeyorSaveCacheOnError", "APPVEYOR_SAVE_CACHE_ON_ERROR", "Set to true to save the build cache even if the build fails (by default, the cache is saved only during successful build finalize steps)."),
    var("AppVeyorAcsDeploymentUpgradeMode", "APPVEYOR_ACS_DEPLOYMENT_UPGRADE_MODE", "Specifies the DeploymentUpgradeMode when deploying an Azure Cloud Service (default is Auto, can be changed to Manual or Simultaneous)."),
    var("AppVeyorIgnoreCommitFilteringOnTag", "APPVEYOR_IGNORE_COMMIT_FILTERING_ON_TAG", "If set to true, a tagged build ignores commit filtering, branch whitelisting/blacklisting, and skip_tags: true settings, except for [skip ci]."),
];

static APPVEYOR_PREFIXES: &[PrefixSpec] = &[
    prefix("AppVeyorCIVariables", "APPVEYOR_", "Signifies AppVeyor CI configuration values."),
];

/// Represents a collection of environment variables used in AppVeyor.
///
/// <https://www.appveyor.com/docs/environment-variables/>
pub static APPVEYOR: Catalog = Catalog {
    name: "appveyor",
    title: "AppVeyor",
    docs_url: "https://www.appveyor.com/docs/environment-variables/",
    vars: APPVEYOR_VARS,
    prefixes: APPVEYOR_PREFIXES,
};
