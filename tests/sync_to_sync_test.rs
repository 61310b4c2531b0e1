//! Sync content from one depot through another
//!
//! The first repository is synced from a fixture remote, published, and
//! distributed; a second repository then syncs from the first one's
//! distribution base URL. Both must end up with identical content
//! summaries. The first sync runs under each download policy; the second
//! is always immediate so every file is actually fetched.

mod common;

use common::{init_tracing, test_client, unique_name, ResponseSequence};
use depot_api_types::{
    ChecksumType, DistributionCreate, PublicationCreate, RemoteCreate, RepositoryCreate,
    SyncPolicy, SyncRequest, TaskState,
};
use depot_client::{added_content_summary, content_summary};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE_URL: &str = "http://fixtures.example/kickstart/";

fn summary_json() -> serde_json::Value {
    json!({"package": 35, "advisory": 4})
}

/// Wire up the fake server for one full sync-to-sync pass
async fn mount_scenario(
    server: &MockServer,
    repo1_name: &str,
    repo2_name: &str,
    policy: SyncPolicy,
) {
    let base_url = format!("{}/content/dist-a/", server.uri());

    // Repository creation is plain CRUD
    Mock::given(method("POST"))
        .and(path("/api/v3/repositories/"))
        .and(body_partial_json(json!({"name": repo1_name})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "href": "/api/v3/repositories/0001/",
            "name": repo1_name
        })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v3/repositories/"))
        .and(body_partial_json(json!({"name": repo2_name})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "href": "/api/v3/repositories/0002/",
            "name": repo2_name
        })))
        .mount(server)
        .await;

    // Remotes: one at the fixture, one at the distribution base URL
    Mock::given(method("POST"))
        .and(path("/api/v3/remotes/"))
        .and(body_partial_json(json!({"url": FIXTURE_URL})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "href": "/api/v3/remotes/0001/",
            "name": "remote-upstream",
            "url": FIXTURE_URL,
            "policy": policy.as_str()
        })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v3/remotes/"))
        .and(body_partial_json(json!({"url": base_url, "policy": "immediate"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "href": "/api/v3/remotes/0002/",
            "name": "remote-mirror",
            "url": base_url,
            "policy": "immediate"
        })))
        .mount(server)
        .await;

    // First sync: queued, runs, completes with a new repository version
    Mock::given(method("POST"))
        .and(path("/api/v3/repositories/0001/sync/"))
        .and(body_partial_json(json!({"remote": "/api/v3/remotes/0001/"})))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({"task": "/api/v3/tasks/sync-0001/"})),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/tasks/sync-0001/"))
        .respond_with(ResponseSequence::new(vec![
            ResponseTemplate::new(200).set_body_json(json!({
                "href": "/api/v3/tasks/sync-0001/", "state": "running"
            })),
            ResponseTemplate::new(200).set_body_json(json!({
                "href": "/api/v3/tasks/sync-0001/",
                "state": "completed",
                "created_resources": ["/api/v3/repositories/0001/versions/1/"]
            })),
        ]))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/repositories/0001/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "href": "/api/v3/repositories/0001/",
            "name": repo1_name,
            "latest_version_href": "/api/v3/repositories/0001/versions/1/"
        })))
        .mount(server)
        .await;

    // Publication with explicit checksum choices; href arrives via the task
    Mock::given(method("POST"))
        .and(path("/api/v3/publications/"))
        .and(body_partial_json(json!({
            "repository": "/api/v3/repositories/0001/",
            "metadata_checksum_type": "sha384",
            "package_checksum_type": "sha224"
        })))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({"task": "/api/v3/tasks/pub-0001/"})),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/tasks/pub-0001/"))
        .respond_with(ResponseSequence::new(vec![
            ResponseTemplate::new(200).set_body_json(json!({
                "href": "/api/v3/tasks/pub-0001/", "state": "waiting"
            })),
            ResponseTemplate::new(200).set_body_json(json!({
                "href": "/api/v3/tasks/pub-0001/",
                "state": "completed",
                "created_resources": ["/api/v3/publications/0001/"]
            })),
        ]))
        .mount(server)
        .await;

    // Distribution serving the publication
    Mock::given(method("POST"))
        .and(path("/api/v3/distributions/"))
        .and(body_partial_json(json!({"publication": "/api/v3/publications/0001/"})))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({"task": "/api/v3/tasks/dist-0001/"})),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/tasks/dist-0001/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "href": "/api/v3/tasks/dist-0001/",
            "state": "completed",
            "created_resources": ["/api/v3/distributions/0001/"]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/distributions/0001/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "href": "/api/v3/distributions/0001/",
            "name": "dist-a",
            "base_path": "dist-a",
            "base_url": base_url,
            "publication": "/api/v3/publications/0001/"
        })))
        .mount(server)
        .await;

    // Second sync, from the distribution
    Mock::given(method("POST"))
        .and(path("/api/v3/repositories/0002/sync/"))
        .and(body_partial_json(json!({"remote": "/api/v3/remotes/0002/"})))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({"task": "/api/v3/tasks/sync-0002/"})),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/tasks/sync-0002/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "href": "/api/v3/tasks/sync-0002/",
            "state": "completed",
            "created_resources": ["/api/v3/repositories/0002/versions/1/"]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/repositories/0002/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "href": "/api/v3/repositories/0002/",
            "name": repo2_name,
            "latest_version_href": "/api/v3/repositories/0002/versions/1/"
        })))
        .mount(server)
        .await;

    // Both versions carry the same content
    for repo in ["0001", "0002"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v3/repositories/{}/versions/1/", repo)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "href": format!("/api/v3/repositories/{}/versions/1/", repo),
                "number": 1,
                "content_summary": {
                    "present": summary_json(),
                    "added": summary_json()
                }
            })))
            .mount(server)
            .await;
    }

    // Cleanup endpoints exercised at the end of the scenario; publication
    // delete is plain CRUD, every other resource deletes through a task
    Mock::given(method("DELETE"))
        .and(path("/api/v3/publications/0001/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
    for (resource, task) in [
        ("/api/v3/distributions/0001/", "/api/v3/tasks/del-dist-0001/"),
        ("/api/v3/remotes/0001/", "/api/v3/tasks/del-rem-0001/"),
        ("/api/v3/remotes/0002/", "/api/v3/tasks/del-rem-0002/"),
        ("/api/v3/repositories/0001/", "/api/v3/tasks/del-repo-0001/"),
        ("/api/v3/repositories/0002/", "/api/v3/tasks/del-repo-0002/"),
    ] {
        Mock::given(method("DELETE"))
            .and(path(resource))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({"task": task})))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path(task))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "href": task,
                "state": "completed",
                "created_resources": []
            })))
            .mount(server)
            .await;
    }
}

async fn do_test(policy: SyncPolicy) -> anyhow::Result<()> {
    init_tracing();
    let server = MockServer::start().await;
    let repo1_name = unique_name("repo");
    let repo2_name = unique_name("repo");
    mount_scenario(&server, &repo1_name, &repo2_name, policy).await;

    let client = test_client(&server);
    let repos = client.repositories();
    let remotes = client.remotes();
    let publications = client.publications();
    let distributions = client.distributions();
    let monitor = client.task_monitor();

    // Create, populate, publish, and distribute the first repository
    let repo = repos.create(&RepositoryCreate::new(&repo1_name)).await?;
    let remote = remotes
        .create(&RemoteCreate::new("remote-upstream", FIXTURE_URL).policy(policy))
        .await?;

    let handle = repos
        .sync(&repo.href, &SyncRequest::new(remote.href.clone()))
        .await?;
    let sync_task = monitor.await_completion(&handle.task).await?;
    assert_eq!(sync_task.state, TaskState::Completed);
    let repo = repos.read(&repo.href).await?;
    assert!(repo.latest_version_href.is_some());

    let handle = publications
        .create(
            &PublicationCreate::new(repo.href.clone())
                .metadata_checksum_type(ChecksumType::Sha384)
                .package_checksum_type(ChecksumType::Sha224),
        )
        .await?;
    let publication_href = monitor.await_completion(&handle.task).await?.created_resources[0].clone();

    let handle = distributions
        .create(&DistributionCreate::new("dist-a", "dist-a").publication(publication_href.clone()))
        .await?;
    let distribution_href = monitor.await_completion(&handle.task).await?.created_resources[0].clone();
    let distribution = distributions.read(&distribution_href).await?;

    // Second repository syncs from the first one's distribution
    let repo2 = repos.create(&RepositoryCreate::new(&repo2_name)).await?;
    let remote2 = remotes
        .create(
            &RemoteCreate::new("remote-mirror", &distribution.base_url)
                .policy(SyncPolicy::Immediate),
        )
        .await?;
    assert_eq!(remote2.url, distribution.base_url);

    let handle = repos
        .sync(&repo2.href, &SyncRequest::new(remote2.href.clone()))
        .await?;
    monitor.await_completion(&handle.task).await?;
    let repo2 = repos.read(&repo2.href).await?;

    // Both repositories must hold the same content
    let summary = content_summary(&repos, &repo).await?;
    let summary2 = content_summary(&repos, &repo2).await?;
    assert_eq!(summary, summary2);

    let added = added_content_summary(&repos, &repo).await?;
    let added2 = added_content_summary(&repos, &repo2).await?;
    assert_eq!(added, added2);

    // Tear down everything the scenario owns
    publications.delete(&publication_href).await?;
    for handle in [
        distributions.delete(&distribution_href).await?,
        remotes.delete(&remote.href).await?,
        remotes.delete(&remote2.href).await?,
        repos.delete(&repo.href).await?,
        repos.delete(&repo2.href).await?,
    ] {
        monitor.await_completion(&handle.task).await?;
    }

    Ok(())
}

#[tokio::test]
async fn test_sync_to_sync_immediate() -> anyhow::Result<()> {
    do_test(SyncPolicy::Immediate).await
}

#[tokio::test]
async fn test_sync_to_sync_on_demand() -> anyhow::Result<()> {
    do_test(SyncPolicy::OnDemand).await
}

#[tokio::test]
async fn test_sync_to_sync_streamed() -> anyhow::Result<()> {
    do_test(SyncPolicy::Streamed).await
}
