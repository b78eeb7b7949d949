//! Row builders for tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use statefeed_core::{
    AclPolicy, AclToken, AclTokenType, AllocClientStatus, AllocDesiredStatus, Allocation,
    AuthMethod, Deployment, DeploymentStatus, EvalStatus, Evaluation, Job, JobType, Node,
    NodeStatus, SchedulingEligibility, ServiceRegistration, Task, TaskGroup,
};
use uuid::Uuid;

fn secret() -> String {
    Uuid::now_v7().to_string()
}

pub fn acl_token(accessor_id: &str) -> AclToken {
    AclToken {
        accessor_id: accessor_id.to_string(),
        secret_id: secret(),
        name: format!("token {accessor_id}"),
        token_type: AclTokenType::Client,
        policies: vec!["readonly".to_string()],
        global: false,
        create_time: Utc::now(),
        expiration_time: None,
        create_index: 10,
        modify_index: 10,
    }
}

pub fn acl_policy(name: &str) -> AclPolicy {
    AclPolicy {
        name: name.to_string(),
        description: format!("{name} policy"),
        rules: "namespace \"default\" { policy = \"read\" }".to_string(),
        create_index: 10,
        modify_index: 10,
    }
}

pub fn auth_method(name: &str) -> AuthMethod {
    AuthMethod {
        name: name.to_string(),
        method_type: "OIDC".to_string(),
        token_locality: "local".to_string(),
        max_token_ttl_secs: 3600,
        default: false,
        create_time: Utc::now(),
        create_index: 10,
        modify_index: 10,
    }
}

pub fn node(id: &str) -> Node {
    Node {
        id: id.to_string(),
        secret_id: secret(),
        name: format!("client-{id}"),
        datacenter: "dc1".to_string(),
        node_class: String::new(),
        node_pool: "default".to_string(),
        http_addr: "10.0.0.7:4646".to_string(),
        status: NodeStatus::Ready,
        scheduling_eligibility: SchedulingEligibility::Eligible,
        drain: false,
        attributes: BTreeMap::from([("kernel.name".to_string(), "linux".to_string())]),
        meta: BTreeMap::new(),
        events: Vec::new(),
        status_updated_at: Utc::now(),
        create_index: 10,
        modify_index: 12,
    }
}

pub fn job(id: &str, namespace: &str) -> Job {
    Job {
        id: id.to_string(),
        namespace: namespace.to_string(),
        name: id.to_string(),
        job_type: JobType::Service,
        priority: 50,
        datacenters: vec!["dc1".to_string()],
        task_groups: vec![TaskGroup {
            name: "app".to_string(),
            count: 3,
            tasks: vec![Task {
                name: "server".to_string(),
                driver: "docker".to_string(),
                config: BTreeMap::from([("image".to_string(), "nginx:1.27".to_string())]),
            }],
        }],
        stop: false,
        version: 0,
        submit_time: Utc::now(),
        create_index: 20,
        modify_index: 20,
    }
}

pub fn allocation(id: &str, job_id: &str, deployment_id: &str) -> Allocation {
    Allocation {
        id: id.to_string(),
        namespace: "default".to_string(),
        eval_id: "e1".to_string(),
        name: format!("{job_id}.app[0]"),
        node_id: "n1".to_string(),
        job_id: job_id.to_string(),
        job: Some(Arc::new(job(job_id, "default"))),
        task_group: "app".to_string(),
        deployment_id: deployment_id.to_string(),
        desired_status: AllocDesiredStatus::Run,
        client_status: AllocClientStatus::Pending,
        create_time: Utc::now(),
        create_index: 30,
        modify_index: 30,
    }
}

pub fn evaluation(id: &str, job_id: &str, deployment_id: &str) -> Evaluation {
    Evaluation {
        id: id.to_string(),
        namespace: "default".to_string(),
        priority: 50,
        eval_type: JobType::Service,
        triggered_by: "job-register".to_string(),
        job_id: job_id.to_string(),
        deployment_id: deployment_id.to_string(),
        node_id: String::new(),
        status: EvalStatus::Pending,
        status_description: String::new(),
        create_time: Utc::now(),
        create_index: 25,
        modify_index: 25,
    }
}

pub fn deployment(id: &str, job_id: &str) -> Deployment {
    Deployment {
        id: id.to_string(),
        namespace: "default".to_string(),
        job_id: job_id.to_string(),
        job_version: 0,
        status: DeploymentStatus::Running,
        status_description: "Deployment is running".to_string(),
        create_index: 26,
        modify_index: 26,
    }
}

pub fn service(id: &str, job_id: &str, service_name: &str) -> ServiceRegistration {
    ServiceRegistration {
        id: id.to_string(),
        service_name: service_name.to_string(),
        namespace: "default".to_string(),
        node_id: "n1".to_string(),
        datacenter: "dc1".to_string(),
        job_id: job_id.to_string(),
        alloc_id: "a1".to_string(),
        tags: vec!["http".to_string()],
        address: "10.0.0.7".to_string(),
        port: 8080,
        create_index: 31,
        modify_index: 31,
    }
}
