// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Amazon Web Services catalogs.

use super::{Catalog, PrefixSpec, VarSpec, prefix, var};

static AWS_VARS: &[VarSpec] = &[
    var("AWSAccessKey", "AWS_ACCESS_KEY", "The access key currently configured."),
    var("AWSAccessKeyId", "AWS_ACCESS_KEY_ID", "The access key ID currently configured."),
    var("AWSSecretAccessKey", "AWS_SECRET_ACCESS_KEY", "The secret access key currently configured."),
    var("AWSRegion", "AWS_REGION", "The AWS Region currently configured. If defined, this value overrides the AWS_DEFAULT_REGION."),
];

static AWS_PREFIXES: &[PrefixSpec] = &[
    prefix("AWSVariables", "AWS_", "Signifies Github configuration values."),
];

/// Represents a collection of environment variables used in Amazon Web Services.
///
/// <https://docs.aws.amazon.com/sdkref/latest/guide/environment-variables.html>
pub static AWS: Catalog = Catalog {
    name: "aws",
    title: "Amazon Web Services",
    docs_url: "https://docs.aws.amazon.com/sdkref/latest/guide/environment-variables.html",
    vars: AWS_VARS,
    prefixes: AWS_PREFIXES,
};

static AWS_LAMBDA_VARS: &[VarSpec] = &[
    var("Handler", "_HANDLER", "The handler location configured on the function."),
    var("AWSDefaultRegion", "AWS_DEFAULT_REGION", "The default AWS Region where the Lambda function is executed."),
    var("AWSExecutionEnvironment", "AWS_EXECUTION_ENV", "The runtime identifier, prefixed by AWS_Lambda_ (for example, AWS_Lambda_java8). This environment variable is not defined for OS-only runtimes (the provided runtime family)."),
    var("AWSLambdaFunctionName", "AWS_LAMBDA_FUNCTION_NAME", "The name of the function."),
    var("AWSLambdaFunctionMemorySize", "AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "The amount of memory available to the function in MB."),
    var("AWSLambdaFunctionVersion", "AWS_LAMBDA_FUNCTION_VERSION", "The version of the function being executed."),
    var("AWSLambdaInitializationType", "AWS_LAMBDA_INITIALIZATION_TYPE", "The initialization type of the function, which is on-demand, provisioned-concurrency, or snap-start. For information, see Configuring provisioned concurrency or Improving startup performance with Lambda SnapStart."),
    var("AWSLambdaLogGroupName", "AWS_LAMBDA_LOG_GROUP_NAME", "The name of the Amazon CloudWatch Logs group for the function. The AWS_LAMBDA_LOG_GROUP_NAME environment variable is not available in Lambda SnapStart functions."),
    var("AWSLambdaLogStreamName", "AWS_LAMBDA_LOG_STREAM_NAME", "The name of the Amazon CloudWatch Logs stream for the function. The AWS_LAMBDA_LOG_STREAM_NAME environment variable is not available in Lambda SnapStart functions."),
    var("AWSLambdaRuntimeApi", "AWS_LAMBDA_RUNTIME_API", "(Custom runtime) The host and port of the runtime API."),
    var("LambdaTaskRoot", "LAMBDA_TASK_ROOT", "The path to your Lambda function code."),
    var("LambdaRuntimeDirectory", "LAMBDA_RUNTIME_DIR", "The path to runtime libraries."),
    var("NodePath", "NODE_PATH", "The Node.js library path (/opt/nodejs/node12/node_modules/:/opt/nodejs/node_modules:$LAMBDA_RUNTIME_DIR/node_modules)."),
    var("PythonPath", "PYTHONPATH", "(Python 2.7, 3.6, 3.8) The Python library path ($LAMBDA_RUNTIME_DIR)."),
    var("GemPath", "GEM_PATH", "(Ruby) The Ruby library path ($LAMBDA_TASK_ROOT/vendor/bundle/ruby/2.5.0:/opt/ruby/gems/2.5.0)."),
    var("AWSLambdaDotnetPreJIT", "AWS_LAMBDA_DOTNET_PREJIT", "For the .NET 6 and .NET 7 runtimes, set this variable to enable or disable .NET specific runtime optimizations. Values include always, never, and provisioned-concurrency. For more information, see Configuring provisioned concurrency for a function."),
];

/// Represents a collection of environment variables used in Amazon Web Services Labmda.
///
/// <https://docs.aws.amazon.com/lambda/latest/dg/configuration-envvars.html>
pub static AWS_LAMBDA: Catalog = Catalog {
    name: "aws-lambda",
    title: "AWS Lambda",
    docs_url: "https://docs.aws.amazon.com/lambda/latest/dg/configuration-envvars.html",
    vars: AWS_LAMBDA_VARS,
    prefixes: &[],
};

static AWS_XRAY_VARS: &[VarSpec] = &[
    var("AmazonTraceId", "_X_AMZN_TRACE_ID", "The X-Ray tracing header. This environment variable changes with each invocation."),
    var("AWSXRayContextMissing", "AWS_XRAY_CONTEXT_MISSING", "For X-Ray tracing, Lambda sets this to LOG_ERROR to avoid throwing runtime errors from the X-Ray SDK."),
    var("AWSXRayDaemonAddress", "AWS_XRAY_DAEMON_ADDRESS", "For X-Ray tracing, the IP address and port of the X-Ray daemon."),
];

/// Represents a collection of environment variables used in Amazon Web Services X-Ray tracing.
///
/// <https://docs.aws.amazon.com/lambda/latest/dg/configuration-envvars.html>
pub static AWS_XRAY: Catalog = Catalog {
    name: "aws-xray",
    title: "AWS X-Ray",
    docs_url: "https://docs.aws.amazon.com/lambda/latest/dg/configuration-envvars.html",
    vars: AWS_XRAY_VARS,
    prefixes: &[],
};
