// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Azure Pipelines catalog.

use super::super::{Catalog, VarSpec, var};

static AZURE_PIPELINES_VARS: &[VarSpec] = &[
    var("AgentBuildDirectory", "Agent.BuildDirectory", "The local path on the agent where all folders for a given build pipeline are created. This variable has the same value as Pipeline.Workspace. For example: /home/vsts/work/1."),
    var("AgentContainerMapping", "Agent.ContainerMapping", "A mapping from container resource names in YAML to their Docker IDs at runtime."),
    var("AgentHomeDirectory", "Agent.HomeDirectory", "The directory the agent is installed into. This contains the agent software. For example: c:\\agent."),
    var("AgentId", "Agent.Id", "The ID of the agent."),
    var("AgentJobName", "Agent.JobName", "The name of the running job. This will usually be \"Job\"; or \"__default\", but in multi-config scenarios, will be the configuration."),
    var("AgentJobStatus", "Agent.JobStatus", "The status of the build."),
    var("AgentMachineName", "Agent.MachineName", "The name of the machine on which the agent is installed."),
    var("AgentName", "Agent.Name", "The name of the agent that is registered with the pool."),
    var("AgentOS", "Agent.OS", "The operating system of the agent host. Valid values are:"),
    var("AgentOSArchitecture", "Agent.OSArchitecture", "The operating system processor architecture of the agent host. Valid values are:"),
    var("AgentTempDirectory", "Agent.TempDirectory", "A temporary folder that is cleaned after each pipeline job. This directory is used by tasks such as .NET Core CLI task to hold temporary items like test results before they're published."),
    var("AgentToolsDirectory", "Agent.ToolsDirectory", "The directory used by tasks such as Node Tool Installer and Use Python Version to switch between multiple versions of a tool."),
    var("AgentWorkFolder", "Agent.WorkFolder", "The working directory for this agent."),
    var("BuildArtifactStagingDirectory", "Build.ArtifactStagingDirectory", "The local path on the agent where any artifacts are copied to before being pushed to their destination. For example: c:\\agent_work\\1\\a."),
    var("BuildBuildId", "Build.BuildId", "The ID of the record for the completed build."),
    var("BuildBuildNumber", "Build.BuildNumber", "The name of the completed build, also known as the run number. You can specify what is included in this value."),
    var("BuildBuildUri", "Build.BuildUri", "The URI for the build. For example: vstfs:///Build/Build/1430."),
    var("BuildBinariesDirectory", "Build.BinariesDirectory", "The local path on the agent you can use as an output folder for compiled binaries."),
    var("BuildContainerId", "Build.ContainerId", "The ID of the container for your artifact. When you upload an artifact in your pipeline, it's added to a container that is specific for that particular artifact."),
    var("BuildCronScheduleDisplayName", "Build.CronSchedule.DisplayName", "The displayName of the cron schedule that triggered the pipeline run. This variable is only set if the pipeline run is triggered by a YAML scheduled trigger. For more information, see schedules.cron definition - Build.CronSchedule.DisplayName variable"),
    var("BuildDefinitionName", "Build.DefinitionName", "The name of the build pipeline."),
    var("BuildDefinitionVersion", "Build.DefinitionVersion", "The version of the build pipeline."),
    var("BuildQueuedBy", "Build.QueuedBy", "See \"How are the identity variables set?\"."),
    var("BuildQueuedById", "Build.QueuedById", "See \"How are the identity variables set?\"."),
    var("BuildReason", "Build.Reason", "The event that caused the build to run."),
    var("BuildRepositoryClean", "Build.Repository.Clean", "The value you've selected for Clean in the source repository settings."),
    var("BuildRepositoryLocalPath", "Build.Repository.LocalPath", "The local path on the agent where your source code files are downloaded. For example: c:\\agent_work\\1\\s."),
    var("BuildRepositoryID", "Build.Repository.ID", "The unique identifier of the repository."),
    var("BuildRepositoryName", "Build.Repository.Name", "The name of the triggering repository."),
    var("BuildRepositoryProvider", "Build.Repository.Provider", "The type of the triggering repository."),
    var("BuildRepositoryTfvcWorkspace", "Build.Repository.Tfvc.Workspace", "Defined if your repository is Team Foundation Version Control. The name of the TFVC workspace used by the build agent."),
    var("BuildRepositoryUri", "Build.Repository.Uri", "The URL for the triggering repository. For example:"),
    var("BuildRequestedFor", "Build.RequestedFor", "See \"How are the identity variables set?\"."),
    var("BuildRequestedForEmail", "Build.RequestedForEmail", "See \"How are the identity variables set?\"."),
    var("BuildRequestedForId", "Build.RequestedForId", "See \"How are the identity variables set?\"."),
    var("BuildSourceBranch", "Build.SourceBranch", "The branch of the triggering repo the build was queued for. Some examples:"),
    var("BuildSourceBranchName", "Build.SourceBranchName", "The name of the branch in the triggering repo the build was queued for."),
    var("BuildSourcesDirectory", "Build.SourcesDirectory", "The local path on the agent where your source code files are downloaded. For example: c:\\agent_work\\1\\s."),
    var("BuildSourceVersion", "Build.SourceVersion", "The latest version control change of the triggering repo that is included in this build."),
    var("BuildSourceVersionMessage", "Build.SourceVersionMessage", "The comment of the commit or changeset for the triggering repo. We truncate the message to the first line or 200 characters, whichever is shorter."),
    var("BuildStagingDirectory", "Build.StagingDirectory", "The local path on the agent where any artifacts are copied to before being pushed to their destination. For example: c:\\agent_work\\1\\a."),
    var("BuildRepositoryGitSubmoduleCheckout", "Build.Repository.Git.SubmoduleCheckout", "The value you've selected for Checkout submodules on the repository tab. With multiple repos checked out, this value tracks the triggering repository's setting."),
    var("BuildSourceTfvcShelveset", "Build.SourceTfvcShelveset", "Defined if your repository is Team Foundation Version Control."),
    var("BuildTriggeredByBuildId", "Build.TriggeredBy.BuildId", "If the build was triggered by another build, then this variable is set to the BuildID of the triggering build. In Classic pipelines, this variable is triggered by a build completion trigger."),
    var("BuildTriggeredByDefinitionId", "Build.TriggeredBy.DefinitionId", "If the build was triggered by another build, then this variable is set to the DefinitionID of the triggering build. In Classic pipelines, this variable is triggered by a build completion trigger."),
    var("BuildTriggeredByDefinitionName", "Build.TriggeredBy.DefinitionName", "If the build was triggered by another build, then this variable is set to the name of the triggering build pipeline. In Classic pipelines, this variable is triggered by a build completion trigger."),
    var("BuildTriggeredByBuildNumber", "Build.TriggeredBy.BuildNumber", "If the build was triggered by another build, then this variable is set to the number of the triggering build. In Classic pipelines, this variable is triggered by a build completion trigger."),
    var("BuildTriggeredByProjectID", "Build.TriggeredBy.ProjectID", "If the build was triggered by another build, then this variable is set to ID of the project that contains the triggering build. In Classic pipelines, this variable is triggered by a build completion trigger."),
    var("CommonTestResultsDirectory", "Common.TestResultsDirectory", "The local path on the agent where the test results are created. For example: c:\\agent_work\\1\\TestResults."),
    var("PipelineWorkspace", "Pipeline.Workspace", "Workspace directory for a particular pipeline. This variable has the same value as Agent.BuildDirectory. For example, /home/vsts/work/1."),
    var("EnvironmentName", "Environment.Name", "Name of the environment targeted in the deployment job to run the deployment steps and record the deployment history. For example, smarthotel-dev."),
    var("EnvironmentId", "Environment.Id", "ID of the environment targeted in the deployment job. For example, 10."),
    var("EnvironmentResourceName", "Environment.ResourceName", "Name of the specific resource within the environment targeted in the deployment job to run the deployment steps and record the deployment history. For example, bookings which is a Kubernetes namespace that has been added as a resource to the environment smarthotel-dev."),
    var("EnvironmentResourceId", "Environment.ResourceId", "ID of the specific resource within the environment targeted in the deployment job to run the deployment steps. For example, 4."),
    var("StrategyName", "Strategy.Name", "The name of the deployment strategy: canary, runOnce, or rolling."),
    var("StrategyCycleName", "Strategy.CycleName", "The current cycle name in a deployment. Options are PreIteration, Iteration, or PostIteration."),
    var("SystemAccessToken", "System.AccessToken", "Use the OAuth token to access the REST API."),
    var("SystemCollectionId", "System.CollectionId", "The GUID of the TFS collection or Azure DevOps organization."),
    var("SystemCollectionUri", "System.CollectionUri", "The URI of the TFS collection or Azure DevOps organization. For example: https://dev.azure.com/fabrikamfiber/."),
    var("SystemDefaultWorkingDirectory", "System.DefaultWorkingDirectory", "The local path on the agent where your source code files are downloaded. For example: c:\\agent_work\\1\\s"),
    var("SystemDefinitionId", "System.DefinitionId", "The ID of the build pipeline."),
    var("SystemHostType", "System.HostType", "Set to build if the pipeline is a build. For a release, the values are deployment for a Deployment group job, gates during evaluation of gates, and release for other (Agent and Agentless) jobs."),
    var("SystemJobAttempt", "System.JobAttempt", "Set to 1 the first time this job is attempted, and increments every time the job is retried."),
    var("SystemJobDisplayName", "System.JobDisplayName", "The human-readable name given to a job."),
    var("SystemJobId", "System.JobId", "A unique identifier for a single attempt of a single job. The value is unique to the current pipeline."),
    var("SystemJobName", "System.JobName", "The name of the job, typically used for expressing dependencies and accessing output variables."),
    var("SystemOidcRequestUri", "System.OidcRequestUri", "Generate an idToken for authentication with Entra ID using OpenID Connect (OIDC). Learn more."),
    var("SystemPhaseAttempt", "System.PhaseAttempt", "Set to 1 the first time this phase is attempted, and increments every time the job is retried."),
    var("SystemPhaseDisplayName", "System.PhaseDisplayName", "The human-readable name given to a phase."),
    var("SystemPhaseName", "System.PhaseName", "A string-based identifier for a job, typically used for expressing dependencies and accessing output variables."),
    var("SystemPlanId", "System.PlanId", "A string-based identifier for a single pipeline run."),
    var("SystemPullRequestIsFork", "System.PullRequest.IsFork", "If the pull request is from a fork of the repository, this variable is set to True."),
    var("SystemPullRequestPullRequestId", "System.PullRequest.PullRequestId", "The ID of the pull request that caused this build. For example: 17. (This variable is initialized only if the build ran because of a Git PR affected by a branch policy)."),
    var("SystemPullRequestPullRequestNumber", "System.PullRequest.PullRequestNumber", "The number of the pull request that caused this build. This variable is populated for pull requests from GitHub that have a different pull request ID and pull request number. This variable is only available in a YAML pipeline if the PR is affected by a branch policy."),
    var("SystemPullRequesttargetBranchName", "System.PullRequest.targetBranchName", "The name of the target branch for a pull request. This variable can be used in a pipeline to conditionally execute tasks or steps based on the target branch of the pull request. For example, you might want to trigger a different set of tests or code analysis tools depending on the branch that the changes are being merged into."),
    var("SystemPullRequestSourceBranch", "System.PullRequest.SourceBranch", "The branch that is being reviewed in a pull request. For example: refs/heads/users/raisa/new-feature for Azure Repos. (This variable is initialized only if the build ran because of a Git PR affected by a branch policy). This variable is only available in a YAML pipeline if the PR is affected by a branch policy."),
    var("SystemPullRequestSourceCommitId", "System.PullRequest.SourceCommitId", "The commit that is being reviewed in a pull request. (This variable is initialized only if the build ran because of a Git PR affected by a branch policy). This variable is only available in a YAML pipeline if the PR is affected by a branch policy."),
    var("SystemPullRequestSourceRepositoryURI", "System.PullRequest.SourceRepositoryURI", "The URL to the repo that contains the pull request. For example: https://dev.azure.com/ouraccount/_git/OurProject."),
    var("SystemPullRequestTargetBranch", "System.PullRequest.TargetBranch", "The branch that is the target of a pull request. For example: refs/heads/main when your repository is in Azure Repos and main when your repository is in GitHub. This variable is initialized only if the build ran because of a Git PR affected by a branch policy. This variable is only available in a YAML pipeline if the PR is affected by a branch policy."),
    var("SystemStageAttempt", "System.StageAttempt", "Set to 1 the first time this stage is attempted, and increments every time the job is retried."),
    var("SystemStageDisplayName", "System.StageDisplayName", "The human-readable name given to a stage."),
    var("SystemStageName", "System.StageName", "A string-based identifier for a stage, typically used for expressing dependencies and accessing output variables."),
    var("SystemTeamFoundationCollectionUri", "System.TeamFoundationCollectionUri", "The URI of the TFS collection or Azure DevOps organization. For example: https://dev.azure.com/fabrikamfiber/."),
    var("SystemTeamProject", "System.TeamProject", "The name of the project that contains this build."),
    var("SystemTeamProjectId", "System.TeamProjectId", "The ID of the project that this build belongs to."),
    var("SystemTimelineId", "System.TimelineId", "A string-based identifier for the execution details and logs of a single pipeline run."),
    var("TeamFoundationBuildTask", "TF_BUILD", "Set to True if the script is being run by a build task."),
    var("ChecksStageAttempt", "Checks.StageAttempt", "Set to 1 the first time this stage is attempted, and increments every time the stage is retried."),
];

/// Represents a collection of environment variables used in Azure Pipelines.
///
/// <https://learn.microsoft.com/en-us/azure/devops/pipelines/build/variables>
pub static AZURE_PIPELINES: Catalog = Catalog {
    name: "azure-pipelines",
    title: "Azure Pipelines",
    docs_url: "https://learn.microsoft.com/en-us/azure/devops/pipelines/build/variables",
    vars: AZURE_PIPELINES_VARS,
    prefixes: &[],
};
