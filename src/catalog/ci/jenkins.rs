// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Jenkins catalog.

use super::super::{Catalog, VarSpec, var};

static JENKINS_VARS: &[VarSpec] = &[
    var("BuildId", "BUILD_ID", "The current build ID, identical to BUILD_NUMBER for builds created in Jenkins versions 1.597+"),
    var("BuildNumber", "BUILD_NUMBER", "The current build number, such as \"153\""),
    var("BuildTag", "BUILD_TAG", "String of jenkins-${JOB_NAME}-${BUILD_NUMBER}. Convenient to put into a resource file, a jar file, etc for easier identification"),
    var("BuildUrl", "BUILD_URL", "The URL where the results of this build can be found (for example http://buildserver/jenkins/job/MyJobName/17/ )"),
    var("ExecutionNumber", "EXECUTOR_NUMBER", "The unique number that identifies the current executor (among executors of the same machine) performing this build. This is the number you see in the \"build executor status\", except that the number starts from 0, not 1"),
    var("JavaHome", "JAVA_HOME", "If your job is configured to use a specific JDK, this variable is set to the JAVA_HOME of the specified JDK. When this variable is set, PATH is also updated to include the bin subdirectory of JAVA_HOME"),
    var("JenkinsUrl", "JENKINS_URL", "Full URL of Jenkins, such as https://example.com:port/jenkins/ (NOTE: only available if Jenkins URL set in \"System Configuration\")"),
    var("JobName", "JOB_NAME", "Name of the project of this build, such as \"foo\" or \"foo/bar\"."),
    var("NodeName", "NODE_NAME", "The name of the node the current build is running on. Set to 'master' for the Jenkins controller."),
    var("Workspace", "WORKSPACE", "The absolute path of the workspace"),
];

/// Represents a collection of environment variables used in Jenkins.
///
/// <https://www.jenkins.io/doc/book/pipeline/jenkinsfile/#using-environment-variables>
pub static JENKINS: Catalog = Catalog {
    name: "jenkins",
    title: "Jenkins",
    docs_url: "https://www.jenkins.io/doc/book/pipeline/jenkinsfile/#using-environment-variables",
    vars: JENKINS_VARS,
    prefixes: &[],
};
